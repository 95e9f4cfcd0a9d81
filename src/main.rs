//! textool CLI - convert textures between the DDS and TEX containers.
//!
//! Each input is converted to a sibling file with the opposite extension.
//! Inputs are independent: a failure on one file is reported and the batch
//! continues, but the process exits non-zero if anything failed.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;

use textool::prelude::*;

/// textool - DDS/TEX texture container converter
#[derive(Parser)]
#[command(name = "textool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input files (.dds converts to .tex, .tex converts to .dds)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// TEX format revision to read and write
    #[arg(short, long, default_value = "v3", value_parser = parse_revision)]
    revision: TexRevision,

    /// Convert files one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,
}

fn parse_revision(s: &str) -> std::result::Result<TexRevision, String> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = ConvertOptions {
        revision: cli.revision,
    };

    let outcomes: Vec<bool> = if cli.sequential {
        cli.inputs
            .iter()
            .map(|input| convert_one(input, &options))
            .collect()
    } else {
        cli.inputs
            .par_iter()
            .map(|input| convert_one(input, &options))
            .collect()
    };

    let failed = outcomes.iter().filter(|ok| !**ok).count();
    println!(
        "Converted {} of {} files",
        outcomes.len() - failed,
        outcomes.len()
    );

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert_one(input: &Path, options: &ConvertOptions) -> bool {
    match try_convert(input, options) {
        Ok(converted) => {
            let desc = converted.descriptor;
            println!(
                "Converted {}x{} {} -> {}",
                desc.width,
                desc.height,
                input.display(),
                converted.output.display()
            );
            true
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            false
        }
    }
}

fn try_convert(input: &Path, options: &ConvertOptions) -> Result<Converted> {
    convert_file(input, options)
        .with_context(|| format!("failed to convert \"{}\"", input.display()))
}
