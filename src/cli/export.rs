//! Export CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::{default_export_filename, export_expenses_csv};
use crate::reports::today;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses to CSV, newest first
    Csv {
        /// Output file (defaults to expenses_<date>.csv in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendwiseResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            if storage.expenses.is_empty() {
                return Err(SpendwiseError::Export("there are no expenses to export".into()));
            }

            let mut expenses = storage.expenses.all().to_vec();
            expenses.sort_by(|a, b| b.date.cmp(&a.date));

            let path = output.unwrap_or_else(|| PathBuf::from(default_export_filename(today())));
            let file = File::create(&path).map_err(|e| {
                SpendwiseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_expenses_csv(&expenses, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SpendwiseError::Export(e.to_string()))?;

            info!(path = %path.display(), count = expenses.len(), "Exported expenses");
            println!("Exported {} expense(s) to {}", expenses.len(), path.display());
        }
    }

    Ok(())
}
