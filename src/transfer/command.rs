//! Command builder for SqlPackage invocations.
//!
//! Maps a `TransferRequest` into the exact argv the external tool is spawned
//! with. Pure and deterministic: same request, byte-identical argv.

use crate::models::{Direction, SQLPACKAGE_BINARY, TransferRequest};

/// Build the full command line, tool binary first.
///
/// Every value is its own argv element and is passed verbatim; nothing is
/// ever concatenated into a shell string, so spaces and special characters in
/// paths or database names need no quoting.
pub fn build_command(request: &TransferRequest) -> Vec<String> {
    let server = request.endpoint.server_name();

    // AuthMode::Integrated is reserved for a /UniversalAuthentication:true
    // flag; neither auth mode emits an authentication argument yet.
    match request.direction {
        Direction::Export => vec![
            SQLPACKAGE_BINARY.to_string(),
            "/Action:Export".to_string(),
            format!("/TargetFile:{}", request.file_path),
            format!("/SourceServerName:{server}"),
            format!("/SourceDatabaseName:{}", request.database_name),
            "/SourceEncryptConnection:false".to_string(),
        ],
        Direction::Import => vec![
            SQLPACKAGE_BINARY.to_string(),
            "/Action:Import".to_string(),
            format!("/SourceFile:{}", request.file_path),
            format!("/TargetServerName:{server}"),
            format!("/TargetDatabaseName:{}", request.database_name),
            "/TargetEncryptConnection:false".to_string(),
        ],
    }
}
