//! Command handlers for `okhl`.
//!
//! Each submodule renders one command's output to a `String`; `main.rs`
//! prints it. Shared helpers (`read_file`, option parsing) live here.

mod highlight;
mod hints;
mod indent;

use ok_mode::ModeConfig;

use crate::CliError;

pub use highlight::{highlight_file, render_json, render_text};
pub use hints::hints_json;
pub use indent::indent_file;

/// Options shared by the file commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: ModeConfig,
    pub json: bool,
}

/// Split `args` (everything after the command name) into the file path and
/// options.
pub fn parse_args(args: &[String], usage: &'static str) -> Result<(String, Options), CliError> {
    let mut options = Options::default();
    let mut path = None;

    for arg in args {
        if arg == "--json" {
            options.json = true;
        } else if let Some(value) = arg.strip_prefix("--indent-unit=") {
            options.config.indent_unit = parse_positive("--indent-unit", value)?;
        } else if let Some(value) = arg.strip_prefix("--tab-size=") {
            options.config.tab_size = parse_positive("--tab-size", value)?;
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::Usage(usage));
        }
    }

    let path = path.ok_or(CliError::Usage(usage))?;
    Ok((path, options))
}

fn parse_positive(option: &'static str, value: &str) -> Result<u32, CliError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidOption {
            option,
            value: value.to_owned(),
        }),
    }
}

/// Read a source file, mapping I/O failures to a user-facing error.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
