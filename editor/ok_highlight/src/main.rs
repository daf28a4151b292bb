//! `okhl`: run the `ok` editor mode from the command line.

use ok_highlight::commands::{hints_json, highlight_file, indent_file, parse_args};
use ok_highlight::{init_tracing, CliError};

const HIGHLIGHT_USAGE: &str = "okhl highlight <file> [--json] [--indent-unit=N] [--tab-size=N]";
const INDENT_USAGE: &str = "okhl indent <file> [--indent-unit=N] [--tab-size=N]";

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "highlight" => parse_args(&args[2..], HIGHLIGHT_USAGE)
            .and_then(|(path, options)| highlight_file(&path, options)),
        "indent" => parse_args(&args[2..], INDENT_USAGE)
            .and_then(|(path, options)| indent_file(&path, options)),
        "hints" => hints_json(),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{}", with_newline(output)),
        Err(e) => exit_with(&e),
    }
}

fn with_newline(mut output: String) -> String {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

fn exit_with(e: &CliError) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn print_usage() {
    eprintln!("okhl: the ok editor mode, outside the editor");
    eprintln!();
    eprintln!("Usage: okhl <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  highlight <file>     Print each lexeme as `line:start..end style \"text\"`");
    eprintln!("  indent <file>        Print the file re-indented");
    eprintln!("  hints                Print the editor hints as JSON");
    eprintln!("  help                 Show this help message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json               Highlight output as JSON");
    eprintln!("  --indent-unit=N      Columns per nesting level (default 2)");
    eprintln!("  --tab-size=N         Tab stop width (default 4)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=ok_mode=trace) to see scanner events.");
}
