//! This is the main entry point for the ODS5 attribute inspection tool.
//!
//! The program fetches the FAT record of every file named on the command
//! line and prints it in the requested representations. Per-file failures
//! are reported and never abort the run.

use clap::Parser;
use log::error;
use ods_rats::fat::record::Fat;
use ods_rats::render;
use ods_rats::{FatError, OutputMode};
use std::path::PathBuf;

/// Inspect ODS file attributes.
#[derive(Parser)]
#[command(name = "rats", about = "inspect ODS file attributes")]
struct Cli {
    /// Format all attributes.
    #[arg(short = 'a')]
    all: bool,
    /// Print data as byte stream.
    #[arg(short = 'b')]
    bytes: bool,
    /// Print field names with their data.
    #[arg(short = 'f')]
    fields: bool,
    /// Files to inspect.
    #[arg(required = true, value_name = "file")]
    files: Vec<PathBuf>,
}

fn main() {
    stderrlog::new().module(module_path!()).init().unwrap();

    let cli = Cli::parse();
    let mode = OutputMode::from_flags(cli.all, cli.bytes, cli.fields);

    for path in &cli.files {
        let raw = match ods_rats::xattr::get_fat(path) {
            Ok(raw) => raw,
            Err(FatError::NotOds5) => {
                error!("{}: not an ODS5 file", path.display());
                continue;
            }
            Err(err) => {
                error!("{}: could not get FAT: {err}", path.display());
                continue;
            }
        };

        let fat = match Fat::decode(&raw) {
            Ok(fat) => fat,
            Err(err) => {
                error!("{}: could not decode FAT: {err}", path.display());
                continue;
            }
        };

        // The original tool printed the base name in the preamble.
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        println!("{name}:");

        print!("{}", render::render(&raw, &fat, mode));
    }
}
