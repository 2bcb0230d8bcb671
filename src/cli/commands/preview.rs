use crate::cli::commands::pick_identifier;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{GenerateLogic, Generation};
use crate::errors::AppResult;
use crate::models::hourly_row::get_headers;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::input::read_lesson_text;
use crate::utils::table::Table;

/// Handle the `preview` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview {
        input,
        section,
        tax_code,
        limit,
    } = cmd
    {
        let text = read_lesson_text(input)?;
        let section_id = pick_identifier(section, &cfg.default_section_id);
        let tax_code = pick_identifier(tax_code, &cfg.default_tax_code);

        let generation = GenerateLogic::run(&text, &section_id, &tax_code)?;
        report_counts(&generation);
        print_rows(&generation, *limit);
    }
    Ok(())
}

/// Shared summary lines for `preview` and `generate`.
pub(crate) fn report_counts(generation: &Generation) {
    success(format!("Found {} lessons!", generation.lessons.len()));
    if generation.skipped_lines > 0 {
        warning(format!(
            "{} line(s) ignored: not in the expected format",
            generation.skipped_lines
        ));
    }
    if generation.rows.is_empty() {
        warning("No hourly rows generated from the recognized lessons.");
    } else {
        info(format!("Generated {} rows", generation.rows.len()));
    }
}

fn print_rows(generation: &Generation, limit: usize) {
    if generation.rows.is_empty() {
        return;
    }

    header("Preview");
    let mut table = Table::new(&get_headers());
    for row in generation.rows.iter().take(limit) {
        table.add_row(&row.to_cells());
    }
    print!("{}", table.render());

    if generation.rows.len() > limit {
        info(format!(
            "Showing first {} of {} rows",
            limit,
            generation.rows.len()
        ));
    }
}
