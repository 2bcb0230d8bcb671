use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(force: bool, cfg_path: &Path) -> AppResult<()> {
    if cfg_path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            cfg_path.display()
        ));
        return Ok(());
    }

    info("Initializing rLessonSheet…");
    Config::default().save_to(cfg_path)?;
    success(format!("Config file: {}", cfg_path.display()));
    Ok(())
}
