//! Transfer request model.
//!
//! A `TransferRequest` is request-scoped: the parameter collector constructs
//! it fully, the command builder consumes it, and nothing is cached or reused
//! across invocations.

use crate::models::ConnectionEndpoint;
use serde::{Deserialize, Serialize};

/// Name of the external migration tool binary.
pub const SQLPACKAGE_BINARY: &str = "SqlPackage";

/// File extension (without the dot) of the transferred artifacts.
pub const BACPAC_EXTENSION: &str = "bacpac";

/// Reserved auth-provider identifier meaning single sign-on / integrated auth.
pub const SSO_AUTH_PROVIDER: &str = "ms-sso";

/// Direction of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Export,
    Import,
}

impl Direction {
    /// Title under which the run is registered with the console.
    pub fn run_title(&self) -> &'static str {
        match self {
            Self::Export => "Export BACPAC",
            Self::Import => "Import BACPAC",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Export => write!(f, "export"),
            Self::Import => write!(f, "import"),
        }
    }
}

/// How the external tool authenticates against the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Single sign-on; reserved extension point, currently adds no flag.
    Integrated,
    /// Credentials live in an external store and are not injected into the
    /// command line.
    ExternalCredentials,
}

/// Everything the command builder needs for one invocation.
///
/// `file_path` always ends in `.bacpac` (case-insensitively) by the time this
/// struct exists; the parameter collector guarantees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub direction: Direction,
    pub file_path: String,
    pub database_name: String,
    pub endpoint: ConnectionEndpoint,
    pub auth_mode: AuthMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_run_titles() {
        assert_eq!(Direction::Export.run_title(), "Export BACPAC");
        assert_eq!(Direction::Import.run_title(), "Import BACPAC");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Export.to_string(), "export");
        assert_eq!(Direction::Import.to_string(), "import");
    }
}
