use std::io;

use bookstat::cli::menu::{Menu, MenuArgs};
use bookstat::logging;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = MenuArgs::parse();
    logging::init(args.verbose);

    let stdin = io::stdin();
    Menu::new(stdin.lock(), io::stdout()).run(args.file.as_deref())?;
    Ok(())
}
