use ok_mode::HINTS;

use crate::CliError;

/// `okhl hints`: the static editor hints as JSON.
pub fn hints_json() -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&HINTS)?)
}
