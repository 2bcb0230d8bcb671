//! Path utilities: expand ~ and resolve output locations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Relative `file` names are placed inside `dir`; absolute ones are kept.
pub fn resolve_in(dir: &str, file: &str) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        expand_tilde(dir).join(p)
    }
}
