//! Tautology checker CLI.
//!
//! Run with:
//! ```bash
//! cargo run --example tautology -- "p -> (q -> p)"
//! ```

use clap::Parser;
use taut_rs::formula::Formula;

#[derive(Debug, Parser)]
#[command(about = "Check whether a propositional formula is a tautology")]
struct Cli {
    /// Formula over {p,q,r,s}; ASCII shortcuts and canonical glyphs both work
    formula: String,

    /// Show the evaluation steps for the first counterexample
    #[arg(long)]
    steps: bool,
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
    let report = formula.check();
    println!("{}", report);

    if let Some(witness) = formula.one_counterexample() {
        println!("counterexample: [{}]", witness);
        if cli.steps {
            for step in formula.evaluation_steps(&witness)? {
                println!("  {} = {}", step.text, if step.value { "T" } else { "F" });
            }
        }
    }

    Ok(())
}
