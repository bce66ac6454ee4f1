//! User-facing dialog interfaces.
//!
//! File choosers and text prompts are owned by the embedding environment.
//! `None` always means the user cancelled; cancellation is a normal abort,
//! never an error.

use std::path::PathBuf;

/// Save-file and open-file dialogs.
pub trait FileDialog {
    /// Ask the user where to save a file, seeding the dialog with
    /// `suggested_name`. Returns the chosen path, or `None` on cancel.
    fn save_file(&self, suggested_name: &str) -> Option<PathBuf>;

    /// Ask the user to pick an existing file with the given extension
    /// (without the dot). Returns the chosen path, or `None` on cancel.
    fn open_file(&self, extension: &str) -> Option<PathBuf>;
}

/// Single-line text input prompt.
pub trait TextPrompt {
    /// Show `message` with `default` pre-filled. Returns the entered text
    /// (untrimmed), or `None` on cancel.
    fn input(&self, message: &str, default: &str) -> Option<String>;
}
