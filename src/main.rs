use std::{
    fs,
    io::{self, Write},
    process,
};

use clap::Parser;
use numera::{error::EvalError, evaluate};

/// numera is an easy to use, interactive calculator for plain arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numera to read expressions from a file, one per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The expression to evaluate. Omit it to start an interactive session.
    contents: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match args.contents {
        Some(path) if args.file => run_file(&path),
        Some(expression) => run_expression(&expression),
        None => run_session(),
    }
}

/// Evaluates a single expression and prints its value.
fn run_expression(expression: &str) {
    match evaluate(expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            report(expression, &e);
            process::exit(1);
        },
    }
}

/// Evaluates a file of expressions, one per line, stopping at the first
/// failure.
fn run_file(path: &str) {
    let contents = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        process::exit(1);
    });

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate(line) {
            Ok(value) => println!("{line} = {value}"),
            Err(e) => {
                report(line, &e);
                process::exit(1);
            },
        }
    }
}

/// Reads expressions from standard input until `exit` or end of input.
///
/// Every line is evaluated with a fresh state, so a failed line never
/// affects the lines after it.
fn run_session() {
    println!("numera {} (type 'exit' to quit)", env!("CARGO_PKG_VERSION"));

    prompt();
    for line in io::stdin().lines() {
        let Ok(line) = line else { break };

        if line == "exit" {
            break;
        }
        if !line.trim().is_empty() {
            match evaluate(&line) {
                Ok(value) => println!("{value}"),
                Err(e) => report(&line, &e),
            }
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Prints an error together with the offending input and a caret pointing
/// at the reported offset.
fn report(expression: &str, error: &EvalError) {
    eprintln!("Error: {error}");
    eprintln!("  {expression}");
    eprintln!("  {}^", " ".repeat(error.offset()));
}
