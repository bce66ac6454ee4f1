//! Command-line adapters for the host interfaces.
//!
//! The binary has no tree view and no dialogs: the selection comes from the
//! subcommand, file paths and database names are plain arguments, and the run
//! console is stdout. Each adapter is a thin preset over the corresponding
//! trait so the binary exercises exactly the same core paths as an
//! interactive host would.

use crate::host::{
    Credentials, CredentialStore, DataSource, FileDialog, NodeKind, RunConsole, SelectionContext,
    TextPrompt,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Environment variable holding the database user name.
pub const ENV_DB_USER: &str = "BACPAC_DB_USER";
/// Environment variable holding the database password.
pub const ENV_DB_PASSWORD: &str = "BACPAC_DB_PASSWORD";

/// Selection synthesized from command-line arguments.
pub struct ArgsSelection {
    kind: NodeKind,
    name: String,
    data_source: DataSource,
}

impl ArgsSelection {
    pub fn new(kind: NodeKind, name: impl Into<String>, data_source: DataSource) -> Self {
        Self {
            kind,
            name: name.into(),
            data_source,
        }
    }
}

impl SelectionContext for ArgsSelection {
    fn node_kind(&self) -> Option<NodeKind> {
        Some(self.kind)
    }

    fn node_name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn data_source(&self) -> Option<DataSource> {
        Some(self.data_source.clone())
    }
}

/// "Dialog" that always picks the path given on the command line.
pub struct ArgsFileDialog {
    path: PathBuf,
}

impl ArgsFileDialog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FileDialog for ArgsFileDialog {
    fn save_file(&self, _suggested_name: &str) -> Option<PathBuf> {
        Some(self.path.clone())
    }

    fn open_file(&self, _extension: &str) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

/// Prompt that answers with a preset value, or the default when none was
/// given.
pub struct ArgsPrompt {
    preset: Option<String>,
}

impl ArgsPrompt {
    pub fn new(preset: Option<String>) -> Self {
        Self { preset }
    }
}

impl TextPrompt for ArgsPrompt {
    fn input(&self, _message: &str, default: &str) -> Option<String> {
        Some(self.preset.clone().unwrap_or_else(|| default.to_string()))
    }
}

/// Credential store backed by environment variables.
pub struct EnvCredentialStore;

impl CredentialStore for EnvCredentialStore {
    fn credentials_for(&self, _data_source_id: &str) -> Option<Credentials> {
        let user = std::env::var(ENV_DB_USER).ok()?;
        let password = std::env::var(ENV_DB_PASSWORD).unwrap_or_default();
        Some(Credentials { user, password })
    }
}

/// Run console that streams tool output to stdout.
pub struct StdoutConsole;

impl RunConsole for StdoutConsole {
    fn register(&self, title: &str) {
        info!(title, "starting run");
    }

    fn append(&self, chunk: &str) {
        let mut out = std::io::stdout().lock();
        // Tool output is best-effort; a broken pipe must not abort the run.
        let _ = out.write_all(chunk.as_bytes());
        let _ = out.flush();
    }

    fn focus(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_selection_answers_everything() {
        let selection = ArgsSelection::new(
            NodeKind::Database,
            "Sales",
            DataSource {
                id: "cli".to_string(),
                url: "jdbc:sqlserver://host:1433".to_string(),
                auth_provider: None,
            },
        );
        assert_eq!(selection.node_kind(), Some(NodeKind::Database));
        assert_eq!(selection.node_name(), Some("Sales".to_string()));
        assert!(selection.data_source().is_some());
    }

    #[test]
    fn test_args_dialog_never_cancels() {
        let dialog = ArgsFileDialog::new(PathBuf::from("/tmp/Sales.bacpac"));
        assert_eq!(
            dialog.save_file("Sales.bacpac"),
            Some(PathBuf::from("/tmp/Sales.bacpac"))
        );
        assert_eq!(
            dialog.open_file("bacpac"),
            Some(PathBuf::from("/tmp/Sales.bacpac"))
        );
    }

    #[test]
    fn test_args_prompt_prefers_preset() {
        let prompt = ArgsPrompt::new(Some("Analytics".to_string()));
        assert_eq!(
            prompt.input("Enter the target database name:", "Sales"),
            Some("Analytics".to_string())
        );
    }

    #[test]
    fn test_args_prompt_falls_back_to_default() {
        let prompt = ArgsPrompt::new(None);
        assert_eq!(
            prompt.input("Enter the target database name:", "Sales"),
            Some("Sales".to_string())
        );
    }
}
