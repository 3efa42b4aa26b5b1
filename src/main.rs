use std::{error::Error, fs, io, path::PathBuf};

use clap::Parser;
use intsub::{interpreter::evaluator::core::run_program, parse, tokenize};

/// intsub runs programs written in a tiny language of integer variables,
/// assignments and output statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the token stream of the file instead of running it.
    #[arg(short, long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed program before running it.
    #[arg(short, long)]
    ast: bool,

    /// The source file to run.
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.path).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             args.path.display());
                                                   std::process::exit(1);
                                               });

    if let Err(e) = execute(&args, &source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn execute(args: &Args, source: &str) -> Result<(), Box<dyn Error>> {
    if args.tokens {
        for (token, line) in tokenize(source)? {
            println!("{line:>4}  {:<14} {}", token.kind.to_string(), token.text);
        }
        return Ok(());
    }

    let program = parse(source)?;
    if args.ast {
        println!("{program:#?}");
    }

    run_program(&program, io::stdout().lock())?;
    Ok(())
}
