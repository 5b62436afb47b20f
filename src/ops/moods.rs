//! List the mood catalog.

use crate::errors::AppResult;
use crate::mood;
use std::io::Write;

/// Prints every catalog mood with its 1-based position.
pub fn list_moods(out: &mut impl Write) -> AppResult<()> {
    for (index, mood) in mood::catalog().iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, mood)?;
    }
    Ok(())
}
