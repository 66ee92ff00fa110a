//! Interactive terminal menu over the same four queries as the CLI

use std::io::{self, BufRead, Write};

use clap::Parser;

use super::parse_bound;
use crate::services::{Aggregator, DataLoaderService};
use crate::types::{Record, DEFAULT_PRICE_FIELD};

/// Interactive menu for analyzing scraped book data
#[derive(Parser, Debug)]
#[command(name = "bookstat-menu")]
#[command(version, about, long_about = None)]
pub struct MenuArgs {
    /// File to load first (prompted for when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Log loader activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Whether the session goes on after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented menu driven by any reader/writer pair
pub struct Menu<R, W> {
    input: R,
    out: W,
    loader: DataLoaderService,
    records: Vec<Record>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            loader: DataLoaderService::new(),
            records: Vec::new(),
        }
    }

    /// Run until the user picks exit or input ends
    pub fn run(&mut self, initial_file: Option<&str>) -> io::Result<()> {
        writeln!(self.out, "Books analysis - interactive menu")?;

        let loaded = match initial_file {
            Some(path) => self.try_load(path)?,
            None => false,
        };
        if !loaded && self.choose_file()? == Flow::Exit {
            return self.goodbye();
        }

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choice: ")? else {
                return self.goodbye();
            };

            let flow = match choice.trim() {
                "0" => Flow::Exit,
                "1" => self.count_in_category()?,
                "2" => self.average_all()?,
                "3" => self.average_in_category()?,
                "4" => self.count_in_range()?,
                "5" => self.choose_file()?,
                _ => {
                    writeln!(self.out, "Unknown choice - enter a number from the menu")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return self.goodbye();
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Select action:")?;
        writeln!(self.out, "  1) Count books in a category")?;
        writeln!(self.out, "  2) Average price (all books)")?;
        writeln!(self.out, "  3) Average price in a category")?;
        writeln!(self.out, "  4) Count books in a price range")?;
        writeln!(self.out, "  5) Reload file")?;
        writeln!(self.out, "  0) Exit")
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "Goodbye")
    }

    /// Print `prompt` and read one line; `None` once input is exhausted
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt with a default shown in brackets; blank input keeps it
    fn prompt_with_default(&mut self, prompt: &str, default: &str) -> io::Result<Option<String>> {
        let answer = self.prompt(&format!("{} [{}]: ", prompt, default))?;
        Ok(answer.map(|a| if a.is_empty() { default.to_string() } else { a }))
    }

    fn prompt_category(&mut self) -> io::Result<Option<String>> {
        let Some(category) = self.prompt("Category name: ")? else {
            return Ok(None);
        };
        if category.is_empty() {
            writeln!(self.out, "Category cannot be empty")?;
        }
        Ok(Some(category))
    }

    fn try_load(&mut self, path: &str) -> io::Result<bool> {
        match self.loader.load(path) {
            Ok(records) => {
                writeln!(self.out, "Loaded {} items from {}", records.len(), path)?;
                self.records = records;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "Error loading file: {}", e)?;
                Ok(false)
            }
        }
    }

    /// Prompt for a path until a file loads
    fn choose_file(&mut self) -> io::Result<Flow> {
        loop {
            let Some(path) = self.prompt("Path to scraped file (json/jsonl/jl/csv): ")? else {
                return Ok(Flow::Exit);
            };
            if path.is_empty() {
                writeln!(self.out, "Please provide a file path.")?;
                continue;
            }
            if self.try_load(&path)? {
                return Ok(Flow::Continue);
            }
        }
    }

    fn count_in_category(&mut self) -> io::Result<Flow> {
        let Some(category) = self.prompt_category()? else {
            return Ok(Flow::Exit);
        };
        if category.is_empty() {
            return Ok(Flow::Continue);
        }

        let n = Aggregator::count_books_in_category(&self.records, &category);
        writeln!(self.out, "Count books in category '{}': {}", category, n)?;
        Ok(Flow::Continue)
    }

    fn average_all(&mut self) -> io::Result<Flow> {
        let Some(price_field) = self.prompt_with_default("Price field name", DEFAULT_PRICE_FIELD)?
        else {
            return Ok(Flow::Exit);
        };

        match Aggregator::average_price_all(&self.records, &price_field) {
            Some(avg) => writeln!(
                self.out,
                "Average price (all books) using field \"{}\": £{:.2}",
                price_field, avg
            )?,
            None => writeln!(self.out, "No valid prices found to compute average")?,
        }
        Ok(Flow::Continue)
    }

    fn average_in_category(&mut self) -> io::Result<Flow> {
        let Some(category) = self.prompt_category()? else {
            return Ok(Flow::Exit);
        };
        if category.is_empty() {
            return Ok(Flow::Continue);
        }
        let Some(price_field) = self.prompt_with_default("Price field name", DEFAULT_PRICE_FIELD)?
        else {
            return Ok(Flow::Exit);
        };

        match Aggregator::average_price_in_category(&self.records, &category, &price_field) {
            Some(avg) => writeln!(
                self.out,
                "Average price in category '{}' using field '{}': £{:.2}",
                category, price_field, avg
            )?,
            None => writeln!(self.out, "No valid prices found in category '{}'", category)?,
        }
        Ok(Flow::Continue)
    }

    fn count_in_range(&mut self) -> io::Result<Flow> {
        let Some(min) = self.prompt("Minimum price (e.g. 5): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(max) = self.prompt("Maximum price (e.g. 20): ")? else {
            return Ok(Flow::Exit);
        };
        let (Some(min), Some(max)) = (parse_bound(&min), parse_bound(&max)) else {
            writeln!(self.out, "Please enter numeric values for min and max")?;
            return Ok(Flow::Continue);
        };
        let Some(price_field) = self.prompt_with_default("Price field name", DEFAULT_PRICE_FIELD)?
        else {
            return Ok(Flow::Exit);
        };

        let n = Aggregator::count_books_in_price_range(&self.records, min, max, &price_field);
        writeln!(
            self.out,
            "Count books in range £{:.2} - £{:.2} (field \"{}\"): {}",
            min, max, price_field, n
        )?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn fixture(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    /// Run a scripted session and return everything written
    fn session(initial: Option<&str>, script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(Cursor::new(script.to_string()), &mut out)
            .run(initial)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn travel_session(script: &str) -> String {
        session(None, &format!("{}\n{}", fixture("books.json"), script))
    }

    #[test]
    fn test_exit_immediately_after_load() {
        let out = travel_session("0\n");
        assert!(out.contains("Loaded 5 items from"));
        assert!(out.contains("Select action:"));
        assert!(out.trim_end().ends_with("Goodbye"));
    }

    #[test]
    fn test_empty_path_reprompts() {
        let out = session(None, &format!("\n{}\n0\n", fixture("books.json")));
        assert!(out.contains("Please provide a file path."));
        assert!(out.contains("Loaded 5 items"));
    }

    #[test]
    fn test_bad_path_reprompts() {
        let out = session(
            None,
            &format!("/nonexistent/books.csv\n{}\n0\n", fixture("books.csv")),
        );
        assert!(out.contains("Error loading file: io error"));
        assert!(out.contains("Loaded 5 items"));
    }

    #[test]
    fn test_eof_while_choosing_file() {
        let out = session(None, "");
        assert!(out.trim_end().ends_with("Goodbye"));
    }

    #[test]
    fn test_initial_file_skips_prompt() {
        let out = session(Some(&fixture("books.jl")), "0\n");
        assert!(out.contains("Loaded 5 items"));
        assert!(!out.contains("Path to scraped file"));
    }

    #[test]
    fn test_count_in_category() {
        let out = travel_session("1\n travel\n0\n");
        assert!(out.contains("Count books in category 'travel': 3"), "{out}");
    }

    #[test]
    fn test_empty_category_rejected() {
        let out = travel_session("1\n\n0\n");
        assert!(out.contains("Category cannot be empty"));
        assert!(!out.contains("Count books in category"));
    }

    #[test]
    fn test_average_all_default_field() {
        let out = travel_session("2\n\n0\n");
        assert!(out.contains("Price field name [price]: "));
        assert!(
            out.contains("Average price (all books) using field \"price\": £50.86"),
            "{out}"
        );
    }

    #[test]
    fn test_average_all_unknown_field() {
        let out = travel_session("2\ncost\n0\n");
        assert!(out.contains("No valid prices found to compute average"));
    }

    #[test]
    fn test_average_in_category() {
        let out = travel_session("3\nTravel\n\n0\n");
        assert!(
            out.contains("Average price in category 'Travel' using field 'price': £48.96"),
            "{out}"
        );
    }

    #[test]
    fn test_average_in_unknown_category() {
        let out = travel_session("3\nMystery\nprice\n0\n");
        assert!(out.contains("No valid prices found in category 'Mystery'"));
    }

    #[test]
    fn test_count_in_range_swapped() {
        let out = travel_session("4\n52\n50\n\n0\n");
        assert!(
            out.contains("Count books in range £52.00 - £50.00 (field \"price\"): 2"),
            "{out}"
        );
    }

    #[test]
    fn test_count_in_range_non_numeric() {
        let out = travel_session("4\nfive\n20\n0\n");
        assert!(out.contains("Please enter numeric values for min and max"));
        assert!(!out.contains("Count books in range"));
    }

    #[test]
    fn test_unknown_choice() {
        let out = travel_session("9\n0\n");
        assert!(out.contains("Unknown choice - enter a number from the menu"));
    }

    #[test]
    fn test_reload_file() {
        let out = travel_session(&format!("5\n{}\n1\nTravel\n0\n", fixture("books.csv")));
        assert_eq!(out.matches("Loaded 5 items").count(), 2);
        assert!(out.contains("Count books in category 'Travel': 3"));
    }

    #[test]
    fn test_eof_mid_query_ends_session() {
        let out = travel_session("3\nTravel\n");
        assert!(out.trim_end().ends_with("Goodbye"));
    }

    #[test]
    fn test_menu_args_parse() {
        let args = MenuArgs::try_parse_from(["bookstat-menu", "books.csv", "-v"]).unwrap();
        assert_eq!(args.file.as_deref(), Some("books.csv"));
        assert!(args.verbose);
    }
}
