pub mod config;
pub mod generate;
pub mod init;
pub mod parse;
pub mod preview;

/// Explicit flag first, then the configured default, then empty
/// (blank identifiers are rejected by the core).
pub(crate) fn pick_identifier(flag: &Option<String>, fallback: &Option<String>) -> String {
    flag.clone()
        .or_else(|| fallback.clone())
        .unwrap_or_default()
}
