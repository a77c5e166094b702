//! rdotm CLI - generate Objective-C resource accessors from `res/values`

pub mod progress;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::codegen::{
    DEFAULT_CLASS_NAME, GenerateConfig, GenerateOptions, GenerateProgress, GenerateSummary,
    generate_with_progress,
};

#[derive(Parser, Debug)]
#[command(name = "rdotm", version)]
#[command(about = "Generate an Objective-C resource class from Android res/values XML files", long_about = None)]
pub struct Cli {
    /// Resource (res) directory path. Required unless set in the config file.
    #[arg(long, value_name = "DIR")]
    pub res: Option<PathBuf>,

    /// Output directory path. Required unless set in the config file.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Class name of the generated sources [default: R]
    #[arg(long, value_name = "NAME")]
    pub class: Option<String>,

    /// Clean output directory before execution
    #[arg(long)]
    pub clean: bool,

    #[arg(long, help = "Also generate NSInteger accessors for <integer> resources")]
    pub integers: bool,

    #[arg(long, help = "Also generate UIImage accessors for images in res/drawable*")]
    pub drawables: bool,

    /// TOML file with default values for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress step output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Merge the config file (if any) under the command-line flags.
    pub fn resolve_options(&self) -> anyhow::Result<GenerateOptions> {
        let config = match &self.config {
            Some(path) => GenerateConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GenerateConfig::default(),
        };

        let Some(res_dir) = self.res.clone().or(config.res) else {
            anyhow::bail!("--res is required (or set `res` in the config file)");
        };
        let Some(out_dir) = self.out.clone().or(config.out) else {
            anyhow::bail!("--out is required (or set `out` in the config file)");
        };
        let class_name = self
            .class
            .clone()
            .or(config.class)
            .unwrap_or_else(|| DEFAULT_CLASS_NAME.to_string());

        Ok(GenerateOptions::new(res_dir, out_dir)
            .with_class_name(class_name)
            .with_clean(self.clean || config.clean.unwrap_or(false))
            .with_integers(self.integers || config.integers.unwrap_or(false))
            .with_drawables(self.drawables || config.drawables.unwrap_or(false)))
    }
}

/// Run the rdotm CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging; RUST_LOG overrides the default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.resolve_options()?;
    let started = Instant::now();

    let summary = if cli.quiet {
        generate_with_progress(&options, &|_| {})?
    } else {
        generate_with_progress(&options, &|p: &GenerateProgress| {
            progress::print_generate_progress(p);
        })?
    };

    if !cli.quiet {
        print_summary(&summary);
        progress::print_done(started.elapsed());
    }

    Ok(())
}

fn print_summary(summary: &GenerateSummary) {
    println!(
        "Generated {} and {}",
        summary.header_path.display(),
        summary.implementation_path.display()
    );
    println!(
        "  {} strings, {} colors, {} integers, {} drawables from {} files",
        summary.strings,
        summary.colors,
        summary.integers,
        summary.drawables,
        summary.files_scanned
    );
    if summary.files_failed > 0 {
        println!("  {} files could not be parsed", summary.files_failed);
    }
    if !summary.skipped.is_empty() {
        println!("  Skipped {} entries:", summary.skipped.len());
        for entry in &summary.skipped {
            println!("    - {} {}: {}", entry.kind, entry.name, entry.reason);
        }
    }
}
