//! `contactbook` executable.
//!
//! # Responsibility
//! - Resolve the data directory, config and preferences.
//! - Start logging, load storage and hand control to the shell.

mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use contactbook_core::config::{
    load_config, load_user_prefs, resolve, DEFAULT_CONFIG_FILE, DEFAULT_LOG_DIR,
};
use contactbook_core::repo::UserPrefsStorage;
use contactbook_core::{default_log_level, init_logging, LogicService, StorageManager};
use log::{info, warn};
use std::path::PathBuf;

/// Hackathon contact and event book.
#[derive(Debug, Parser)]
#[command(name = "contactbook", version, about, long_about = None)]
struct Cli {
    /// Directory holding config, preferences, data files and logs
    #[arg(long, env = "CONTACTBOOK_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Config file, relative to the data directory unless absolute
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level override (trace|debug|info|warn|error)
    #[arg(long, env = "CONTACTBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Run the given commands in order, then exit instead of starting the shell
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = absolute_dir(&cli.data_dir)?;
    let config_path = resolve(&data_dir, &cli.config);
    let config = load_config(&config_path);

    let level = cli
        .log_level
        .clone()
        .filter(|level| !level.trim().is_empty())
        .or_else(|| Some(config.log_level.clone()).filter(|level| !level.trim().is_empty()))
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &data_dir.join(DEFAULT_LOG_DIR)).context("failed to start logging")?;

    let prefs_path = resolve(&data_dir, &config.user_prefs_file_path);
    let raw_prefs = load_user_prefs(&prefs_path);
    let storage = StorageManager::from_prefs(&raw_prefs.resolved_against(&data_dir), &prefs_path);
    let mut service = LogicService::load(storage);

    info!(
        "event=cli_start module=cli status=ok mode={}",
        if cli.commands.is_empty() { "shell" } else { "batch" }
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.commands.is_empty() {
        let stdin = std::io::stdin();
        shell::run(&mut service, stdin.lock(), &mut out)?;
    } else {
        shell::run_batch(&mut service, &cli.commands, &mut out)?;
    }

    if let Err(err) = service.storage().save_user_prefs(&raw_prefs) {
        warn!(
            "event=cli_exit module=cli status=error error_code=prefs_save_failed cause={}",
            err.code()
        );
    }
    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn absolute_dir(dir: &std::path::Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(dir))
}
