//! rLessonSheet library root.
//! Exposes the lesson parser and hourly expander, the export layer and the
//! CLI dispatcher used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(*force, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Parse { input } => cli::commands::parse::handle(input),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config path: --config override, otherwise ~/.rlessonsheet/rlessonsheet.conf
    let cfg_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&cfg_path)?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}

/// Convenience for library users: text + identifiers → rows.
pub fn generate_rows(
    text: &str,
    section_id: &str,
    tax_code: &str,
) -> AppResult<Vec<models::HourlyRow>> {
    let lessons = crate::core::parse_lesson_text(text);
    crate::core::generate_hourly_rows(&lessons, section_id, tax_code)
}
