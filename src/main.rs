use std::{fs, io, path::PathBuf};

use clap::Parser;
use quill::{interpreter::value::core::Value, repl, run_program};

/// quill is a small, dynamically-typed scripting language with first-class
/// functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file to run. Starts the REPL when omitted.
    script: Option<PathBuf>,

    /// Evaluate a code snippet directly instead of reading a file.
    #[arg(short, long)]
    code: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = if let Some(path) = args.script {
        fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the script file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        })
    } else if let Some(code) = args.code {
        code
    } else {
        let stdin = io::stdin();
        if let Err(e) = repl::start(&mut stdin.lock(), &mut io::stdout()) {
            eprintln!("{e}");
        }
        return;
    };

    match run_program(&source) {
        Ok(Some(value)) if value != Value::Null => println!("{value}"),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
