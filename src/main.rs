//! Quartz Compiler Front End
//!
//! A low-level language targeting a field-element virtual machine.

mod frontend;
mod types;
mod utils;

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use frontend::parser::parse_expr;
use frontend::semantic::simplify_type_system;
use frontend::symbols::SymbolTable;
use types::resolve::mark_types_in_expr_resolved;
use utils::Error;

/// Quartz Compiler Front End
#[derive(Parser, Debug)]
#[command(name = "quartzc")]
#[command(version = "0.1.0")]
#[command(about = "Quartz compiler front end - expression type checking and simplification")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Type-check an expression and print its simplified form and type
    Check {
        /// Expression text (or a file path with --file)
        expr: String,

        /// Treat the argument as a file path
        #[arg(long)]
        file: bool,

        /// Emit a structured JSON diagnostic record
        #[arg(long)]
        json: bool,
    },
    /// Parse an expression and print its canonical formatting
    Fmt {
        /// Expression text (or a file path with --file)
        expr: String,

        /// Treat the argument as a file path
        #[arg(long)]
        file: bool,
    },
    /// Print version information
    Version,
}

/// Structured result of a `check` run, for tooling consumers
#[derive(Serialize, Debug)]
struct CheckRecord {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    expr: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    ty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<(usize, usize)>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check { expr, file, json } => {
            let source = read_source(&expr, file)?;
            check_expr(&source, json);
        }
        Commands::Fmt { expr, file } => {
            let source = read_source(&expr, file)?;
            match parse_expr(&source) {
                Ok(parsed) => println!("{}", parsed),
                Err(err) => report_error(&source, &err),
            }
        }
        Commands::Version => {
            println!("quartzc 0.1.0");
            println!("Quartz Compiler Front End");
        }
    }
    Ok(())
}

fn read_source(arg: &str, is_file: bool) -> anyhow::Result<String> {
    if is_file {
        let path = PathBuf::from(arg);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(text.trim().to_string())
    } else {
        Ok(arg.to_string())
    }
}

fn check_expr(source: &str, json: bool) {
    debug!("checking expression: {}", source);

    // The CLI checks standalone expressions against an empty symbol table,
    // so dot-operator expressions report their struct name as unknown.
    let symbols = SymbolTable::new();
    let result = parse_expr(source)
        .map(mark_types_in_expr_resolved)
        .and_then(|parsed| simplify_type_system(&parsed, Some(&symbols)));

    match result {
        Ok((simplified, ty)) => {
            if json {
                print_record(CheckRecord {
                    ok: true,
                    expr: Some(simplified.to_string()),
                    ty: Some(ty.to_string()),
                    error: None,
                    span: None,
                });
            } else {
                println!("{} : {}", simplified, ty);
            }
        }
        Err(err) => {
            if json {
                let span = err.span();
                print_record(CheckRecord {
                    ok: false,
                    expr: None,
                    ty: None,
                    error: Some(err.to_string()),
                    span: Some((span.start, span.end)),
                });
                process::exit(1);
            }
            report_error(source, &err);
        }
    }
}

/// Print the error with a caret line pointing into the source text
fn report_error(source: &str, err: &Error) -> ! {
    let span = err.span();
    if err.is_internal() {
        eprintln!("internal error: {}", err);
    } else {
        eprintln!("error: {}", err);
    }
    eprintln!("  {}", source);
    let width = span.end.saturating_sub(span.start).max(1);
    eprintln!("  {}{}", " ".repeat(span.start), "^".repeat(width));
    process::exit(1);
}

fn print_record(record: CheckRecord) {
    match serde_json::to_string_pretty(&record) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("error: failed to serialize diagnostic record: {}", err);
            process::exit(1);
        }
    }
}
