//! Data models for BACPAC transfers.
//!
//! This module re-exports the request-scoped types shared by the collector,
//! the command builder, and the process runner.

pub mod endpoint;
pub mod request;

pub use endpoint::{ConnectionEndpoint, SQLSERVER_URL_PREFIX};
pub use request::{
    AuthMode, BACPAC_EXTENSION, Direction, SQLPACKAGE_BINARY, SSO_AUTH_PROVIDER, TransferRequest,
};
