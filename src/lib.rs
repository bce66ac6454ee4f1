//! BACPAC transfer library.
//!
//! Orchestrates the SqlPackage CLI to export SQL Server databases to BACPAC
//! files and import them back, streaming the tool's output into a host-owned
//! run console. Host concerns (selection, dialogs, credentials, display) sit
//! behind the narrow traits in [`host`]; the transfer core in [`transfer`]
//! depends only on those.

pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod transfer;

pub use config::Config;
pub use error::{TransferError, TransferResult};
pub use models::{Direction, TransferRequest};
