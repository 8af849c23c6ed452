//! Command-line tool for parsing and checking annotation array literals.
//!
//! Usage: annot [OPTIONS] [FILE]
//!
//! Options:
//!   -e, --expr <LITERAL>   Parse the literal given on the command line
//!   --check                Validate only (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! Reads FILE, or stdin when neither FILE nor --expr is given. On success
//! prints the normalized rendering of the parsed literal.

use libannot::parse_with_source_name;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut expr: Option<String> = None;
    let mut check_only = false;
    let mut input_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("annot {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-e" | "--expr" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -e requires a literal argument");
                    process::exit(1);
                }
                expr = Some(args[i].clone());
            }
            "--check" => {
                check_only = true;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                eprintln!("Error: unknown option '{}'", arg);
                process::exit(1);
            }
            arg => {
                if input_path.is_some() {
                    eprintln!("Error: multiple input files given");
                    process::exit(1);
                }
                input_path = Some(arg.to_string());
            }
        }
        i += 1;
    }

    let (content, source_name) = match (expr, input_path) {
        (Some(_), Some(_)) => {
            eprintln!("Error: cannot combine --expr with a file argument");
            process::exit(1);
        }
        (Some(expr), None) => (expr, None),
        (None, Some(path)) => {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error: cannot read '{}': {}", path, e);
                    process::exit(1);
                }
            };
            (content, Some(path))
        }
        (None, None) => {
            let mut content = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut content) {
                eprintln!("Error: cannot read stdin: {}", e);
                process::exit(1);
            }
            (content, None)
        }
    };

    match parse_with_source_name(content.trim_end(), source_name.as_deref()) {
        Ok(value) => {
            if !check_only {
                println!("{}", value);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_help() {
    println!("annot - parse and check annotation array literals");
    println!();
    println!("Usage: annot [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -e, --expr <LITERAL>   Parse the literal given on the command line");
    println!("  --check                Validate only (exit 0 if valid, 1 if invalid)");
    println!("  -h, --help             Print help");
    println!("  -V, --version          Print version");
    println!();
    println!("Reads FILE, or stdin when neither FILE nor --expr is given.");
    println!("On success prints the normalized rendering of the parsed literal.");
}
