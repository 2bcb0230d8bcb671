use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
    #[serde(default)]
    pub default_section_id: Option<String>,
    #[serde(default)]
    pub default_tax_code: Option<String>,
}

fn default_sheet_name() -> String {
    "Lezioni".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_format() -> ExportFormat {
    ExportFormat::Xlsx
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            output_dir: default_output_dir(),
            default_format: default_format(),
            default_section_id: None,
            default_tax_code: None,
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.rlessonsheet`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rlessonsheet")
    }

    /// Full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlessonsheet.conf")
    }

    /// Load from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        // empty file → defaults
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let p = env::temp_dir().join(format!("{name}_rlessonsheet.conf"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let p = temp_conf("cfg_missing");
        assert_eq!(Config::load_from(&p).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let p = temp_conf("cfg_partial");
        fs::write(&p, "default_section_id: \"141230\"\ndefault_format: csv\n").unwrap();
        let cfg = Config::load_from(&p).unwrap();
        assert_eq!(cfg.default_section_id.as_deref(), Some("141230"));
        assert_eq!(cfg.default_format, ExportFormat::Csv);
        assert_eq!(cfg.sheet_name, "Lezioni");
        assert_eq!(cfg.output_dir, ".");
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let p = temp_conf("cfg_invalid");
        fs::write(&p, "default_format: [not, a, format]\n").unwrap();
        assert!(matches!(Config::load_from(&p), Err(AppError::Config(_))));
    }

    #[test]
    fn save_then_load() {
        let p = temp_conf("cfg_save");
        let cfg = Config {
            default_tax_code: Some("MLSNRS97S25F205C".into()),
            ..Config::default()
        };
        cfg.save_to(&p).unwrap();
        assert_eq!(Config::load_from(&p).unwrap(), cfg);
    }
}
