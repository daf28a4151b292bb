use ok_mode::{reindent, OkMode};

use super::{read_file, Options};
use crate::CliError;

/// `okhl indent <file>`: the file re-indented with spaces.
pub fn indent_file(path: &str, options: Options) -> Result<String, CliError> {
    let source = read_file(path)?;
    Ok(reindent(&OkMode::new(options.config), &source))
}
