//! Interfaces to the embedding environment.
//!
//! The transfer core never talks to a UI framework directly. Everything it
//! needs from the outside world goes through the narrow traits in this
//! module:
//! - `selection`: what is currently selected in the tree view
//! - `dialogs`: file choosers and text prompts
//! - `credentials`: lookup into the external credential store
//! - `console`: the streamed, titled run display
//! - `cli`: non-interactive adapters used by the binary

pub mod cli;
pub mod console;
pub mod credentials;
pub mod dialogs;
pub mod selection;

pub use console::RunConsole;
pub use credentials::{CredentialStore, Credentials};
pub use dialogs::{FileDialog, TextPrompt};
pub use selection::{DataSource, NodeKind, SelectionContext};
