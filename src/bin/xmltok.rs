//! A small CLI that tokenizes a file (or stdin) and prints each token.
//!
//! ```text
//! xmltok path/to/file.xml
//! cat file.xml | xmltok
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use xmlparser::Tokenizer;

fn main() -> ExitCode {
    let path = env::args().nth(1);

    let input = match path {
        Some(path) => match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("xmltok: couldn't read {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut s = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut s) {
                eprintln!("xmltok: couldn't read stdin: {e}");
                return ExitCode::FAILURE;
            }
            s
        }
    };

    for result in Tokenizer::new(&input) {
        match result {
            Ok(token) => println!("{token:#?}"),
            Err(e) => {
                eprintln!("xmltok: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
