//! Export and import actions.
//!
//! Each action is one straight line through the core: validator gate,
//! parameter collection, command building, launch. `Ok(false)` means the
//! action did nothing (inapplicable selection or user cancel); `Ok(true)`
//! means a tool process is running. Two invocations share no state and may
//! run concurrently.

use crate::error::TransferResult;
use crate::host::{CredentialStore, FileDialog, SelectionContext, TextPrompt};
use crate::models::Direction;
use crate::transfer::collect::{collect_export, collect_import};
use crate::transfer::command::build_command;
use crate::transfer::runner::ToolRunner;
use crate::transfer::validate::is_applicable;
use tracing::info;

/// Everything an action needs from the embedding environment.
pub struct ActionEnv<'a> {
    pub selection: &'a dyn SelectionContext,
    pub dialogs: &'a dyn FileDialog,
    pub prompt: &'a dyn TextPrompt,
    pub credentials: &'a dyn CredentialStore,
    pub runner: &'a dyn ToolRunner,
}

/// Export the selected database to a BACPAC file.
pub fn run_export(env: &ActionEnv<'_>) -> TransferResult<bool> {
    if !is_applicable(env.selection, Direction::Export) {
        return Ok(false);
    }

    let Some(request) = collect_export(env.selection, env.dialogs, env.credentials)? else {
        return Ok(false);
    };

    info!(
        database = %request.database_name,
        server = %request.endpoint,
        file = %request.file_path,
        "exporting database"
    );

    let argv = build_command(&request);
    env.runner.launch(&argv, request.direction.run_title())?;
    Ok(true)
}

/// Import a BACPAC file into a new database on the selected server.
pub fn run_import(env: &ActionEnv<'_>) -> TransferResult<bool> {
    if !is_applicable(env.selection, Direction::Import) {
        return Ok(false);
    }

    let Some(request) =
        collect_import(env.selection, env.dialogs, env.prompt, env.credentials)?
    else {
        return Ok(false);
    };

    info!(
        database = %request.database_name,
        server = %request.endpoint,
        file = %request.file_path,
        "importing database"
    );

    let argv = build_command(&request);
    env.runner.launch(&argv, request.direction.run_title())?;
    Ok(true)
}
