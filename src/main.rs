use anyhow::Result;
use clap::Parser;
use std::io;

use lesson_demos::cli::{init_logging, Cli, Commands};
use lesson_demos::{classify_and_print, run_car_demo, snapshots_json, Moment, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Car { json } => run_car(json)?,
        Commands::Fizzbuzz => run_fizzbuzz()?,
        Commands::Sequence { n } => classify_and_print(n)?,
    }

    Ok(())
}

fn run_car(json: bool) -> Result<()> {
    let (car1, car2) = run_car_demo()?;

    if json {
        println!("{}", snapshots_json(&[&car1, &car2])?);
    }

    Ok(())
}

fn run_fizzbuzz() -> Result<()> {
    // One clock reading for header and footer
    let moment = Moment::capture();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run(&moment)?;

    Ok(())
}
