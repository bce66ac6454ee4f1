//! Connection endpoint derived from a JDBC-style connection URL.

use crate::error::{TransferError, TransferResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Scheme prefix identifying SQL Server data sources.
pub const SQLSERVER_URL_PREFIX: &str = "jdbc:sqlserver:";

/// Host and optional port of the server a transfer talks to.
///
/// Derived once per invocation from the data source's connection URL and
/// never mutated afterward. An absent port means the server's default port;
/// the external tool is then given the bare host name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEndpoint {
    pub host: String,
    pub port: Option<u16>,
}

impl ConnectionEndpoint {
    /// Parse an endpoint from a connection URL such as
    /// `jdbc:sqlserver://host:1433;databaseName=x;encrypt=true`.
    ///
    /// The scheme prefix is stripped before parsing, and the authority ends at
    /// the first `;` (JDBC properties) or `/` (path). A URL without a usable
    /// host is an error.
    pub fn from_connection_url(raw: &str) -> TransferResult<Self> {
        let rest = raw.strip_prefix(SQLSERVER_URL_PREFIX).unwrap_or(raw);
        let authority = rest.trim_start_matches('/');
        let authority = authority
            .split([';', '/'])
            .next()
            .unwrap_or_default()
            .trim();

        if authority.is_empty() {
            return Err(TransferError::malformed_url(raw, "missing host"));
        }

        // Reuse the url crate's authority parsing (ports, IPv6 brackets,
        // userinfo) by grafting the authority onto a plain scheme.
        let parsed = Url::parse(&format!("sqlserver://{authority}"))
            .map_err(|e| TransferError::malformed_url(raw, e.to_string()))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| TransferError::malformed_url(raw, "missing host"))?
            .to_string();

        Ok(Self {
            host,
            port: parsed.port(),
        })
    }

    /// Render the endpoint the way SqlPackage expects a server name:
    /// `host` or `host,port`.
    pub fn server_name(&self) -> String {
        match self.port {
            Some(port) => format!("{},{}", self.host, port),
            None => self.host.clone(),
        }
    }
}

impl std::fmt::Display for ConnectionEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.server_name())
    }
}
