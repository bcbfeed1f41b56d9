use std::fs;

use clap::Parser;
use scrawl::get_result;

/// scrawl is a small, dynamically-typed expression language with first-class
/// anonymous functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells scrawl to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a scrawl script.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
