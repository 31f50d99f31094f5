//! Optional removal of the setup script once the run is done

use crate::error::{SetupError, SetupResult};
use crate::prompt::Prompter;
use std::path::Path;
use tokio::fs;

pub const CLEANUP_PROMPT: &str = "Would you like to delete this setup script now? (y/n)";

/// `y` or `yes`, any case, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted,
    Kept,
    /// Confirmed, but the script was already gone
    AlreadyGone,
}

/// Ask once and delete `script` on an affirmative answer
pub async fn confirm_and_remove<P: Prompter + ?Sized>(
    prompter: &mut P,
    script: &Path,
) -> SetupResult<CleanupOutcome> {
    let answer = prompter.ask(CLEANUP_PROMPT).map_err(SetupError::Prompt)?;
    if !is_affirmative(&answer) {
        return Ok(CleanupOutcome::Kept);
    }

    match fs::remove_file(script).await {
        Ok(()) => Ok(CleanupOutcome::Deleted),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CleanupOutcome::AlreadyGone),
        Err(source) => Err(SetupError::Remove {
            path: script.to_path_buf(),
            source,
        }),
    }
}
