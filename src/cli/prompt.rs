//! Interactive prompt helpers

use colored::Colorize;
use dialoguer::Confirm;

use nessus6::{Error, Result};

/// Convert a dialoguer failure into the library error type
pub fn prompt_error(err: dialoguer::Error) -> Error {
    Error::Other(format!("Interactive prompt error: {}", err))
}

/// Ask before a destructive action unless `--yes` was given.
///
/// Returns `false` when the user declines.
pub fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprintln!("{} Delete {}? This cannot be undone.", "⚠".yellow(), what);
    let confirmed = Confirm::new()
        .with_prompt("Confirm deletion?")
        .default(false)
        .interact()
        .map_err(prompt_error)?;

    if !confirmed {
        eprintln!("Cancelled.");
    }
    Ok(confirmed)
}
