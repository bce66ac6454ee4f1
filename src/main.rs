//! bacpac-transfer - Main entry point.
//!
//! Non-interactive front end for the transfer core: the selection, dialogs
//! and prompts an IDE would provide are synthesized from command-line
//! arguments, and the run console is stdout.

use bacpac_transfer::config::{Action, Config};
use bacpac_transfer::host::cli::{
    ArgsFileDialog, ArgsPrompt, ArgsSelection, EnvCredentialStore, StdoutConsole,
};
use bacpac_transfer::host::{DataSource, NodeKind};
use bacpac_transfer::models::{SQLPACKAGE_BINARY, SQLSERVER_URL_PREFIX, SSO_AUTH_PROVIDER};
use bacpac_transfer::transfer::{
    ActionEnv, RunRegistry, SqlPackageRunner, run_export, run_import, tool_available,
};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init();
    }
}

fn data_source(url: &str, sso: bool) -> DataSource {
    DataSource {
        id: "cli".to_string(),
        url: url.to_string(),
        auth_provider: sso.then(|| SSO_AUTH_PROVIDER.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_tracing(&config);

    if !tool_available(SQLPACKAGE_BINARY) {
        warn!(
            "{} was not found on PATH; the transfer will fail to launch",
            SQLPACKAGE_BINARY
        );
    }

    let registry = Arc::new(RunRegistry::new());
    let runner = SqlPackageRunner::new(Arc::new(StdoutConsole), registry.clone());
    let credentials = EnvCredentialStore;

    let launched = match &config.action {
        Action::Export {
            url,
            database,
            out,
            sso,
        } => {
            let selection =
                ArgsSelection::new(NodeKind::Database, database.clone(), data_source(url, *sso));
            let dialogs = ArgsFileDialog::new(out.clone());
            let prompt = ArgsPrompt::new(None);
            run_export(&ActionEnv {
                selection: &selection,
                dialogs: &dialogs,
                prompt: &prompt,
                credentials: &credentials,
                runner: &runner,
            })?
        }
        Action::Import {
            url,
            file,
            database,
            sso,
        } => {
            let selection = ArgsSelection::new(NodeKind::Server, "server", data_source(url, *sso));
            let dialogs = ArgsFileDialog::new(file.clone());
            let prompt = ArgsPrompt::new(database.clone());
            run_import(&ActionEnv {
                selection: &selection,
                dialogs: &dialogs,
                prompt: &prompt,
                credentials: &credentials,
                runner: &runner,
            })?
        }
    };

    if !launched {
        error!(
            "nothing to do: the connection URL must start with '{}'",
            SQLSERVER_URL_PREFIX
        );
        std::process::exit(1);
    }

    registry.wait_all().await;
    Ok(())
}
