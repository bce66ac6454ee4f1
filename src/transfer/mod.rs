//! The transfer core.
//!
//! Four small pieces shared by both directions:
//! - `validate`: is the action applicable to the current selection
//! - `collect`: gather endpoint, file path and database name into a request
//! - `command`: map the request onto the external tool's argv
//! - `runner`: spawn the tool and stream its output into the run console
//! - `actions`: wire the pieces into the export and import flows

pub mod actions;
pub mod collect;
pub mod command;
pub mod runner;
pub mod validate;

pub use actions::{ActionEnv, run_export, run_import};
pub use collect::{collect_export, collect_import, ensure_bacpac_extension, normalize_export_path};
pub use command::build_command;
pub use runner::{ProcessHandle, RunRegistry, SqlPackageRunner, ToolRunner, tool_available};
pub use validate::is_applicable;
