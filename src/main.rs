// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use kodi_repo::{PackageReport, Packager};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "kodi-repo")]
#[command(author, version, about = "Build the WeebayModz Kodi addon repository", long_about = None)]
struct Cli {
    /// Directory to write the repository layout into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn build(cli: &Cli) -> Result<PackageReport> {
    let packager = Packager::new(&cli.output_dir);
    let report = packager
        .run()
        .with_context(|| format!("packaging into {}", cli.output_dir.display()))?;
    Ok(report)
}

fn print_next_steps(report: &PackageReport) {
    println!("\nRepository created successfully!");
    println!("\nNext steps:");
    println!("1. Commit and push all files to your repository");
    println!("2. Enable GitHub Pages in repository settings (use main branch)");
    println!("\nUsers can then install your repository using:");
    println!("{}", report.install_url);
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Failures are reported, not propagated: the run just stops where it failed
    match build(&cli) {
        Ok(report) => {
            info!(
                "addons.xml checksum {} ({} addon files, {} repository files)",
                report.checksum, report.addon_entries, report.repository_entries
            );
            print_next_steps(&report);
        }
        Err(e) => eprintln!("Error creating repository: {:#}", e),
    }

    Ok(())
}
