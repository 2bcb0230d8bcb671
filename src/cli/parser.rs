use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLessonSheet
/// Turns a free-text lesson schedule into an hour-by-hour attendance sheet
#[derive(Parser)]
#[command(
    name = "rlessonsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate hour-by-hour lesson sheets (XLSX/CSV/JSON) from a free-text schedule",
    long_about = None,
    after_help = "Line format:  Subject - DD/MM/YYYY HH:MM - HH:MM - Mode\n\
                  Example:      Matematica - 01/09/2025 09:00 - 11:00 - Online\n\
                  The 13:00-14:00 lunch hour is skipped automatically."
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the lessons recognized in the schedule text
    Parse {
        #[arg(long, short = 'i', value_name = "FILE", help = "Schedule text file ('-' for stdin)")]
        input: String,
    },

    /// Preview the hourly rows without writing any file
    Preview {
        #[arg(long, short = 'i', value_name = "FILE", help = "Schedule text file ('-' for stdin)")]
        input: String,

        #[arg(long = "section", value_name = "ID", help = "Section identifier (ID_SEZIONE)")]
        section: Option<String>,

        #[arg(long = "tax-code", value_name = "CF", help = "Teacher tax code (CODICE FISCALE)")]
        tax_code: Option<String>,

        #[arg(long, default_value_t = 10, help = "Number of rows to show")]
        limit: usize,
    },

    /// Generate the hourly sheet and export it
    Generate {
        #[arg(long, short = 'i', value_name = "FILE", help = "Schedule text file ('-' for stdin)")]
        input: String,

        #[arg(long = "section", value_name = "ID", help = "Section identifier (ID_SEZIONE)")]
        section: Option<String>,

        #[arg(long = "tax-code", value_name = "CF", help = "Teacher tax code (CODICE FISCALE)")]
        tax_code: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: lezioni_<section>_<timestamp>.<ext> in output_dir)"
        )]
        file: Option<String>,

        #[arg(long, value_enum, help = "Output format (default from configuration)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
