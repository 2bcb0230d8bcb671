// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Verifica se il file di output può essere scritto.
///
/// - file assente → Ok
/// - file presente e `force` → Ok
/// - file presente senza `force` → chiede conferma all'utente
///
/// La cartella padre viene creata solo dopo l'ok, mai su annullamento.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        confirm_overwrite(path)?;
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

fn confirm_overwrite(path: &Path) -> AppResult<()> {
    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "s" | "si" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn fresh_dir(name: &str) -> std::path::PathBuf {
        let dir = env::temp_dir().join(format!("{name}_rlessonsheet_fs"));
        fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn creates_missing_parent_for_new_file() {
        let dir = fresh_dir("fs_new_parent");
        let out = dir.join("nested").join("out.csv");
        ensure_writable(&out, false).unwrap();
        assert!(out.parent().unwrap().is_dir());
        assert!(!out.exists());
    }

    #[test]
    fn existing_file_with_force_is_accepted() {
        let dir = fresh_dir("fs_force");
        fs::create_dir_all(&dir).unwrap();
        let out = dir.join("out.csv");
        fs::write(&out, "old").unwrap();
        ensure_writable(&out, true).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "old");
    }
}
