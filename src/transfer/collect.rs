//! Parameter collector.
//!
//! Gathers everything a `TransferRequest` needs: the endpoint parsed from the
//! connection URL, a file path from the host's dialogs, and a database name
//! from the selection (export) or a text prompt (import). `Ok(None)` means
//! the user cancelled; nothing has been spawned and nothing is left behind.

use crate::error::TransferResult;
use crate::host::{CredentialStore, DataSource, FileDialog, SelectionContext, TextPrompt};
use crate::models::{
    AuthMode, BACPAC_EXTENSION, ConnectionEndpoint, Direction, TransferRequest,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prompt text for the import target database name.
pub const DATABASE_NAME_PROMPT: &str = "Enter the target database name:";

fn has_bacpac_extension(name: &str) -> bool {
    name.to_ascii_lowercase()
        .ends_with(&format!(".{BACPAC_EXTENSION}"))
}

/// Append the `.bacpac` extension unless the name already carries it
/// (case-insensitively). Idempotent.
pub fn ensure_bacpac_extension(name: &str) -> String {
    if has_bacpac_extension(name) {
        name.to_string()
    } else {
        format!("{name}.{BACPAC_EXTENSION}")
    }
}

/// Normalize a path chosen in a save dialog into the export target path.
///
/// Trailing path separators are stripped; if the user picked an existing
/// directory, the suggested filename is appended; the result always ends in
/// `.bacpac` exactly once.
pub fn normalize_export_path(chosen: &Path, suggested_name: &str) -> String {
    let trimmed = chosen
        .to_string_lossy()
        .trim_end_matches(['/', '\\'])
        .to_string();

    let mut path = PathBuf::from(&trimmed);
    if path.is_dir() {
        path = path.join(ensure_bacpac_extension(suggested_name));
    }

    ensure_bacpac_extension(&path.to_string_lossy())
}

fn resolve_auth_mode(data_source: &DataSource, credentials: &dyn CredentialStore) -> AuthMode {
    if data_source.uses_sso() {
        AuthMode::Integrated
    } else {
        // Looked up, but not yet injected into the command line; SqlPackage
        // currently relies on integrated auth or ambient credentials.
        if let Some(creds) = credentials.credentials_for(&data_source.id) {
            debug!(user = %creds.user, "stored credentials resolved, not forwarded");
        }
        AuthMode::ExternalCredentials
    }
}

/// Collect parameters for an export of the selected database.
pub fn collect_export(
    selection: &dyn SelectionContext,
    dialogs: &dyn FileDialog,
    credentials: &dyn CredentialStore,
) -> TransferResult<Option<TransferRequest>> {
    let Some(data_source) = selection.data_source() else {
        return Ok(None);
    };
    let Some(database_name) = selection.node_name() else {
        return Ok(None);
    };
    let endpoint = ConnectionEndpoint::from_connection_url(&data_source.url)?;

    let suggested_name = format!("{database_name}.{BACPAC_EXTENSION}");
    let Some(chosen) = dialogs.save_file(&suggested_name) else {
        debug!("save dialog cancelled, aborting export");
        return Ok(None);
    };
    let file_path = normalize_export_path(&chosen, &suggested_name);

    let auth_mode = resolve_auth_mode(&data_source, credentials);

    Ok(Some(TransferRequest {
        direction: Direction::Export,
        file_path,
        database_name,
        endpoint,
        auth_mode,
    }))
}

/// Collect parameters for an import into the selected server.
pub fn collect_import(
    selection: &dyn SelectionContext,
    dialogs: &dyn FileDialog,
    prompt: &dyn TextPrompt,
    credentials: &dyn CredentialStore,
) -> TransferResult<Option<TransferRequest>> {
    let Some(data_source) = selection.data_source() else {
        return Ok(None);
    };
    let endpoint = ConnectionEndpoint::from_connection_url(&data_source.url)?;

    let Some(source) = dialogs.open_file(BACPAC_EXTENSION) else {
        debug!("open dialog cancelled, aborting import");
        return Ok(None);
    };

    let default_name = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(entered) = prompt.input(DATABASE_NAME_PROMPT, &default_name) else {
        debug!("database name prompt cancelled, aborting import");
        return Ok(None);
    };
    let database_name = entered.trim().to_string();
    if database_name.is_empty() {
        return Ok(None);
    }

    let auth_mode = resolve_auth_mode(&data_source, credentials);

    Ok(Some(TransferRequest {
        direction: Direction::Import,
        file_path: source.to_string_lossy().into_owned(),
        database_name,
        endpoint,
        auth_mode,
    }))
}
