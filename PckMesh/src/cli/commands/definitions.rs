//! Subcommand enum definitions for CLI

use clap::Subcommand;
use std::path::PathBuf;

/// Top-level PckMesh commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a PCK file and display its groups
    Inspect {
        /// PCK file to inspect
        path: PathBuf,

        /// Write the full inspection (offsets, hex dumps, faces) as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Export a PCK file to Wavefront OBJ
    Export {
        /// Source PCK file
        source: PathBuf,

        /// Output OBJ file (defaults to the source path with .obj)
        destination: Option<PathBuf>,

        /// Divide vertex and UV coordinates by 256
        #[arg(short, long)]
        scale: bool,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Export every PCK file under a directory to OBJ
    Batch {
        /// Directory to search for .pck files
        source: PathBuf,

        /// Output directory (source layout is preserved)
        destination: PathBuf,

        /// Divide vertex and UV coordinates by 256
        #[arg(short, long)]
        scale: bool,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Command, FromArgMatches};

    fn cli() -> Command {
        Commands::augment_subcommands(Command::new("pckmesh"))
    }

    #[test]
    fn test_commands_are_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_batch_quiet_flag() {
        let matches = cli().get_matches_from(["pckmesh", "batch", "in", "out", "-q"]);
        let command = Commands::from_arg_matches(&matches).unwrap();
        assert!(matches!(
            command,
            Commands::Batch { quiet: true, scale: false, .. }
        ));
    }
}
