//! Command-line interface of the Fermidump binary.

use std::path::PathBuf;

use clap::Parser;

use crate::io::format::fermidump_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted Fermidump heading to the `fermidump-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    fermidump_output!("╭─────────────────────────────────────────────────────────────────────────╮");
    fermidump_output!("│                                                                         │");
    fermidump_output!("│    F E R M I D U M P                                         {version:>9}  │");
    fermidump_output!("│                                                                         │");
    fermidump_output!("│    Second-quantised molecular Hamiltonians from DIRAC calculations      │");
    fermidump_output!("│                                                                         │");
    fermidump_output!("╰─────────────────────────────────────────────────────────────────────────╯");
    fermidump_output!("");
}

/// The command-line arguments of the Fermidump binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The YAML input file controlling the run.
    #[arg(short, long)]
    pub config: PathBuf,

    /// An optional file to which the main output is written; if unspecified, the
    /// main output goes to the console.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increases the verbosity of the debug log. May be specified up to three times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
