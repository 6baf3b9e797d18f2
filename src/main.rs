//! Mini-0 recognizer CLI entry point
//!
//! Reads one source file, recognizes it against the Mini-0 grammar, and
//! exits 0 on success or 1 with a diagnostic on stderr. `--dump-tokens`
//! prints the token stream instead of recognizing.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mini0::diagnostics;
use mini0::lexer;
use mini0::parser;

/// Check a Mini-0 source file against the language grammar.
#[derive(Parser)]
#[command(name = "mini0", version, about)]
struct Cli {
    /// Source file to check
    file: PathBuf,

    /// Print the token stream instead of recognizing
    #[arg(long)]
    dump_tokens: bool,
}

fn main() -> ExitCode {
    // Initialize structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    let mut source = match fs::read_to_string(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", cli.file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    // The grammar is line-oriented; make sure the final line is closed.
    if !source.is_empty() && !source.ends_with('\n') {
        source.push('\n');
    }

    if cli.dump_tokens {
        for token in lexer::scan(&source) {
            println!("[line {}] {} '{}'", token.line, token.kind, token.text.escape_debug());
        }
        return ExitCode::SUCCESS;
    }

    let file_name = cli.file.display().to_string();
    match parser::parse(&source) {
        Ok(()) => {
            println!("{}: syntax OK", file_name);
            ExitCode::SUCCESS
        }
        Err(err) => {
            diagnostics::print_error(&file_name, &source, &err);
            ExitCode::FAILURE
        }
    }
}
