//! `--clear-draft` handler.

use crate::app::persist::Autosave;
use crate::theme::draft_path;

/// What: Delete the autosaved draft and exit.
///
/// Details:
/// - Succeeds when there was no draft to delete.
pub fn handle_clear_draft() -> ! {
    tracing::info!("Clear draft requested from CLI");
    let path = draft_path();
    let mut autosave = Autosave::new(path.clone(), std::time::Duration::ZERO);
    autosave.clear();
    println!("Draft cleared: {}", path.display());
    std::process::exit(0);
}
