//! Configuration handling for the bacpac-transfer CLI.
//!
//! Arguments come from the command line with environment-variable fallbacks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the bacpac-transfer CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bacpac-transfer",
    about = "Export and import SQL Server BACPAC files via the SqlPackage CLI",
    version,
    author
)]
pub struct Config {
    #[command(subcommand)]
    pub action: Action,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL, env = "BACPAC_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, global = true, env = "BACPAC_JSON_LOGS")]
    pub json_logs: bool,
}

/// The transfer to run.
#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Export a database to a BACPAC file
    Export {
        /// Connection URL, e.g. "jdbc:sqlserver://host:1433"
        #[arg(short, long, env = "BACPAC_URL")]
        url: String,

        /// Name of the database to export
        #[arg(short, long)]
        database: String,

        /// Target file, or an existing directory to place the file in
        #[arg(short, long, value_name = "PATH")]
        out: PathBuf,

        /// Use single sign-on (integrated) authentication
        #[arg(long)]
        sso: bool,
    },
    /// Import a BACPAC file into a new database
    Import {
        /// Connection URL, e.g. "jdbc:sqlserver://host:1433"
        #[arg(short, long, env = "BACPAC_URL")]
        url: String,

        /// Source .bacpac file
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,

        /// Target database name (defaults to the file name)
        #[arg(short, long)]
        database: Option<String>,

        /// Use single sign-on (integrated) authentication
        #[arg(long)]
        sso: bool,
    },
}
