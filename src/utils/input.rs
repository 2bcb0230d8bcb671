//! Reading the schedule text from a file or stdin.

use crate::errors::AppResult;
use std::fs;
use std::io::{self, Read};

/// `-` reads stdin, anything else is a file path.
pub fn read_lesson_text(source: &str) -> AppResult<String> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}
