mod cli;
mod error;
mod log_init;

use std::fmt::Write as _;
use std::process::ExitCode;

use clap::Parser;
use stylemap::{Stylesheet, parse_stylesheet_with};

use cli::Cli;
use error::{CliError, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    log_init::init_logger(log_init::level_for(cli.verbose));

    match run(&cli) {
        Ok(listing) => {
            print!("{listing}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let path = cli.input.display().to_string();
    log::info!("reading {path}");

    let raw = std::fs::read(&cli.input).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    let sheet = parse_stylesheet_with(&raw, &cli.parse_options())
        .map_err(|source| CliError::Syntax { path, source })?;

    Ok(listing(&sheet))
}

/// One `<kind> <selector>` line per rule, then its declarations, all sorted.
fn listing(sheet: &Stylesheet) -> String {
    let mut rules: Vec<_> = sheet.iter().collect();
    rules.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (rule, declarations) in rules {
        let _ = writeln!(out, "{} {}", rule.kind(), rule);
        let mut pairs: Vec<_> = declarations.iter().collect();
        pairs.sort();
        for (property, value) in pairs {
            let _ = writeln!(out, "  {property} = {value}");
        }
    }
    out
}
