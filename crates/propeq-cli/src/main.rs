//! `propeq`: reads two propositional sentences and reports whether they are
//! logically equivalent.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use propeq_core::{Checker, Comparison, Limits, Trailing};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "propeq", version, about, long_about = None)]
struct Cli {
    /// First sentence; read from standard input when omitted.
    first: Option<String>,
    /// Second sentence; read from standard input when omitted.
    second: Option<String>,
    /// Reject tokens left over after a complete sentence.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Maximum number of distinct variables across both sentences.
    #[arg(long, value_name = "N")]
    max_vars: Option<usize>,
    /// Print the first assignment on which the sentences differ.
    #[arg(long, short, default_value_t = false)]
    counterexample: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(comparison) => {
            print_verdict(&comparison, cli.counterexample);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<Comparison> {
    let mut limits = Limits::default();
    if let Some(max_vars) = cli.max_vars {
        limits = limits.with_max_variables(max_vars);
    }
    let trailing = if cli.strict {
        Trailing::Reject
    } else {
        Trailing::Ignore
    };

    let mut input = io::stdin().lock();
    let first = match &cli.first {
        Some(text) => text.clone(),
        None => prompt(&mut input, "Enter the first sentence:")?,
    };
    let second = match &cli.second {
        Some(text) => text.clone(),
        None => prompt(&mut input, "Enter the second sentence:")?,
    };

    let checker = Checker::with_limits(limits).trailing(trailing);
    let comparison = checker
        .compare(&first, &second)
        .context("could not compare sentences")?;
    Ok(comparison)
}

/// Ask for one line on stderr and read it without its line terminator.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    eprintln!("{message}");
    io::stderr().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read standard input")? == 0 {
        bail!("standard input ended before a sentence was read");
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn print_verdict(comparison: &Comparison, counterexample: bool) {
    if comparison.is_equivalent() {
        println!("The sentences are logically equivalent.");
        return;
    }
    println!("The sentences are not logically equivalent.");

    if !counterexample {
        return;
    }
    if let (Some(bindings), Some(c)) = (
        comparison.counterexample_bindings(),
        comparison.verdict.counterexample(),
    ) {
        let row = bindings
            .iter()
            .map(|(name, value)| format!("{name}={}", if *value { 'T' } else { 'F' }))
            .collect::<Vec<_>>()
            .join(" ");
        println!("Counterexample: {row}");
        println!(
            "First sentence is {}, second is {}.",
            truth(c.first),
            truth(c.second)
        );
    }
}

fn truth(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
