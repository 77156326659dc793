//! Truth-table printer CLI.
//!
//! Run with:
//! ```bash
//! cargo run --example truth_table -- "(p ∧ q) ∨ r"
//! ```

use clap::Parser;
use taut_rs::formula::Formula;

#[derive(Debug, Parser)]
#[command(about = "Print the full truth table of a propositional formula")]
struct Cli {
    /// Formula over {p,q,r,s}; ASCII shortcuts and canonical glyphs both work
    formula: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let formula = Formula::parse(&cli.formula)?;
    let table = formula.truth_table();
    print!("{}", table);
    println!(
        "{} of {} rows true",
        table.count_true(),
        table.num_rows()
    );

    Ok(())
}
