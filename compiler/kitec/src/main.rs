//! Kite CLI
//!
//! Token REPL and file lexer for the Kite scripting language.

use std::io;
use std::path::Path;

use kitec::commands::{lex_file, run_repl, CommandError, ReplConfig};

fn main() {
    kitec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);

    match command {
        "repl" => {
            let options = args.get(2..).unwrap_or_default();
            let config = ReplConfig::from_args(options).unwrap_or_else(|e| fail(&e));
            println!("Kite {} (Ctrl-D to exit)", env!("CARGO_PKG_VERSION"));
            let stdin = io::stdin();
            if let Err(e) = run_repl(stdin.lock(), io::stdout().lock(), &config) {
                fail(&e);
            }
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: kite lex <file>");
                std::process::exit(1);
            };
            let summary =
                lex_file(Path::new(path), &mut io::stdout().lock()).unwrap_or_else(|e| fail(&e));
            for err in &summary.errors {
                eprintln!("error: {err}");
            }
            if !summary.errors.is_empty() {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Kite {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Kite (token REPL and lexer)");
    println!();
    println!("Usage: kite [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Scan lines from stdin and print their tokens (default)");
    println!("  lex <file>           Tokenize a file and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Repl options:");
    println!("  --prompt=<text>      Prompt printed before each line (default: \">> \")");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=kite_lexer=trace) for diagnostic logging.");
}
