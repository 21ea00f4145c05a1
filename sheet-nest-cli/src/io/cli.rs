use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::SheetChoice;

/// Nests the bill of materials of an instance onto a stock sheet
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance: a named sheet and the parts to cut, with quantities
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder for `sol_<instance>.json` and `sol_<instance>.svg`, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON configuration, defaults are used when absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Nest onto this sheet of the standard catalog, overrides the sheet of the configuration
    #[arg(long, value_name = "INDEX")]
    pub sheet_index: Option<usize>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Also append the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Sheet to nest onto, the command line takes precedence over the configuration.
    pub fn sheet_choice(&self, configured: SheetChoice) -> SheetChoice {
        match self.sheet_index {
            Some(index) => SheetChoice::Catalog { index },
            None => configured,
        }
    }
}
