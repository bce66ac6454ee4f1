//! Tree-selection query interface.
//!
//! The embedding environment (an IDE tree view, or the CLI adapter) answers
//! what is currently selected; the core only ever reads it.

use serde::{Deserialize, Serialize};

/// Kind of tree node the user has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Root node representing the server connection itself.
    Server,
    /// A database / namespace-level node under a server.
    Database,
    /// Anything else (table, column, folder, ...).
    Other,
}

/// The data source owning the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    /// Stable identifier, used as the credential-store key.
    pub id: String,
    /// Raw connection URL, e.g. `jdbc:sqlserver://host:1433;databaseName=x`.
    pub url: String,
    /// Configured auth-provider identifier, if any.
    pub auth_provider: Option<String>,
}

impl DataSource {
    /// True when this data source uses single sign-on.
    pub fn uses_sso(&self) -> bool {
        self.auth_provider.as_deref() == Some(crate::models::SSO_AUTH_PROVIDER)
    }
}

/// Read-only view of the current selection.
///
/// All methods return `None` for an empty or multi-node selection; the
/// validator and collector treat that as "not applicable" and never fail on
/// it.
pub trait SelectionContext {
    /// Kind of the single selected node, if exactly one node is selected.
    fn node_kind(&self) -> Option<NodeKind>;

    /// Display name of the selected node (the database name for
    /// database-level nodes).
    fn node_name(&self) -> Option<String>;

    /// The data source the selection belongs to.
    fn data_source(&self) -> Option<DataSource>;
}
