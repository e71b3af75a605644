use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use itertools::Itertools;
use log::info;

use rust_genops::merge::merge;
use rust_genops::output::Sink;
use rust_genops::reader::ingest_all;
use rust_genops::report::LogReporter;
use rust_genops::SnifferRegistry;

/// Operations on genomic position files of unknown layout.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Join files on chromosome and position, keeping positions present in every file.
    Merge {
        /// Input files, plain or gzip-compressed.
        #[arg(required = true)]
        genome_files: Vec<PathBuf>,

        /// Output file (`.gz` for compressed output); stdout when omitted or `-`.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Report the detected format and header of each file.
    Sniff {
        #[arg(required = true)]
        genome_files: Vec<PathBuf>,
    },
}

fn run_merge(genome_files: &[PathBuf], output: Option<PathBuf>) -> Result<()> {
    let registry = SnifferRegistry::default();
    let mut reporter = LogReporter::default();
    let datasets = ingest_all(&registry, genome_files, &mut reporter)
        .context("failed to read input files")?;
    info!(
        "Determined the format of {} of {} input files",
        datasets.len(),
        genome_files.len()
    );
    let merged = merge(&datasets, &mut reporter).context("failed to merge input files")?;
    let sink = Sink::from(output);
    sink.write(&merged)
        .with_context(|| format!("failed to write output to {:?}", sink))?;
    info!("Wrote {} merged records", merged.len());
    Ok(())
}

fn run_sniff(genome_files: &[PathBuf]) -> Result<()> {
    let registry = SnifferRegistry::default();
    info!("Trying formats in order: {}", registry.formats().join(", "));
    for path in genome_files {
        let found = registry
            .classify_path(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match found {
            Some(classification) => println!(
                "{}\t{}\t{}",
                path.display(),
                classification.format(),
                classification
                    .header()
                    .map(|header| header.iter().join(","))
                    .unwrap_or_default()
            ),
            None => println!("{}\tunrecognized\t", path.display()),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match args.command {
        Command::Merge {
            genome_files,
            output,
        } => run_merge(&genome_files, output),
        Command::Sniff { genome_files } => run_sniff(&genome_files),
    }
}
