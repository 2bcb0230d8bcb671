#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE: &str = "\
Matematica - 01/09/2025 09:00 - 11:00 - Online
Riunione - 01/09/2025 12:00 - 15:00 - Ufficio
Corso senza formato corretto
";

pub fn rls() -> Command {
    cargo_bin_cmd!("rlessonsheet")
}

/// Unique config path inside the system temp dir (removed if present)
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlessonsheet.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the schedule text to a temp file and return its path
pub fn write_input(name: &str, text: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lessons.txt", name));
    fs::write(&path, text).expect("write input file");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty temp directory
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlessonsheet_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}
