//! rLessonSheet main entrypoint.

use rlessonsheet::run;
use rlessonsheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
