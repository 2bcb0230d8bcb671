use crate::cli::commands::pick_identifier;
use crate::cli::commands::preview::report_counts;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::GenerateLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::naming::default_file_name;
use crate::utils::input::read_lesson_text;
use crate::utils::path::resolve_in;
use chrono::Local;

/// Handle the `generate` command: parse, expand, export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        input,
        section,
        tax_code,
        file,
        format,
        force,
    } = cmd
    {
        let text = read_lesson_text(input)?;
        let section_id = pick_identifier(section, &cfg.default_section_id);
        let tax_code = pick_identifier(tax_code, &cfg.default_tax_code);

        // everything is validated before touching the filesystem
        let generation = GenerateLogic::run(&text, &section_id, &tax_code)?;
        report_counts(&generation);

        let format = format.unwrap_or(cfg.default_format);
        let name = match file {
            Some(f) => f.clone(),
            None => default_file_name(&section_id, Local::now().naive_local(), format),
        };
        let path = resolve_in(&cfg.output_dir, &name);

        ExportLogic::export(&generation.rows, format, &path, &cfg.sheet_name, *force)?;
    }
    Ok(())
}
