//! Command execution implementations

use super::Commands;
use super::pck;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Inspect { path, json } => pck::inspect(path, json.as_deref()),
            Commands::Export {
                source,
                destination,
                scale,
                quiet,
            } => pck::export(source, destination.as_deref(), *scale, *quiet),
            Commands::Batch {
                source,
                destination,
                scale,
                quiet,
            } => pck::batch(source, destination, *scale, *quiet),
        }
    }
}
