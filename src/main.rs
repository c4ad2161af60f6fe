//! popout - regex-driven terminal syntax highlighter
//!
//! Prints a text file with every substring matching a configured
//! pattern rendered in that pattern's color.

mod config;
mod error;
mod output;
mod syntax;

use std::env;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process;

use error::{HighlightError, Result};
use output::TerminalStyler;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Invocation<'a> {
    Help,
    Version,
    Highlight { input: &'a Path, config: &'a Path },
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("popout");

    let (input_path, config_path) = match parse_args(&args)? {
        Invocation::Help => {
            print_usage(program);
            return Ok(());
        }
        Invocation::Version => {
            print_version();
            return Ok(());
        }
        Invocation::Highlight { input, config } => (input, config),
    };

    // Configuration errors are reported before the input is touched
    let rules = config::load(config_path)?;
    if rules.is_empty() {
        log::warn!("{} defines no rules; output will be plain", config_path.display());
    }

    let content = read_input(input_path)?;
    log::debug!("Read {} bytes from {}", content.len(), input_path.display());

    let mut styler = TerminalStyler::new(io::stdout().lock());
    styler.write_line("HTML Syntax Highlighter")?;
    styler.write_line("")?;
    let segments = output::render(&content, &rules, &mut styler)?;
    log::debug!("Wrote {} segments", segments);

    Ok(())
}

/// Interpret the full argument vector, program name included
fn parse_args(args: &[String]) -> Result<Invocation<'_>> {
    let program = args.first().map(String::as_str).unwrap_or("popout");
    match args {
        [_, flag] if flag == "--help" || flag == "-h" => Ok(Invocation::Help),
        [_, flag] if flag == "--version" || flag == "-V" => Ok(Invocation::Version),
        [_, input, config] => Ok(Invocation::Highlight {
            input: Path::new(input),
            config: Path::new(config),
        }),
        _ => Err(HighlightError::Usage(program.to_string())),
    }
}

/// Read the file to highlight as UTF-8 text with `\n` line endings
fn read_input(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => HighlightError::InputNotFound(path.display().to_string()),
        _ => HighlightError::InputRead {
            path: path.display().to_string(),
            source,
        },
    })?;
    Ok(normalize_newlines(content))
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

fn print_usage(program: &str) {
    println!("popout {} - regex-driven terminal syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: {} FILE CONFIG", program);
    println!();
    println!("Arguments:");
    println!("  FILE           Text file to highlight");
    println!("  CONFIG         Rule file (.json, or .toml)");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Each rule maps a name to a pattern and a color:");
    println!("  {{ \"tag\": {{ \"pattern\": \"</?[a-zA-Z][a-zA-Z0-9]*>\", \"color\": \"cyan\" }} }}");
    println!();
    println!("Colors: red, green, yellow, blue, cyan, magenta, white, reset");
    println!();
    println!("Set RUST_LOG=debug to trace rule loading on stderr.");
}

fn print_version() {
    println!("popout {}", env!("CARGO_PKG_VERSION"));
}
