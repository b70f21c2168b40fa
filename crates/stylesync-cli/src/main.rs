//! `stylesync` - apply `theme.config.json` to the project's stylesheets.
//!
//! Run from the project root with no arguments to update the four
//! stylesheets in place. See `stylesync --help` for the optional flags.

mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use stylesync::{FsSource, Layout, Synchronizer, DEFAULT_CONFIG_PATH};
use tracing_subscriber::EnvFilter;

/// Synchronize stylesheet values with a JSON theme config.
#[derive(Debug, Parser)]
#[command(name = "stylesync", version, about)]
struct Cli {
    /// Project root the config and stylesheets are resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Theme config path, relative to the root
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Report what would change without writing any stylesheet
    #[arg(long)]
    dry_run: bool,

    /// Fail if any stylesheet is out of date with the config (implies --dry-run)
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let dry_run = cli.dry_run || cli.check;
    let layout = Layout::default().with_config(&cli.config);
    let mut sync = Synchronizer::new(FsSource::new(&cli.root))
        .with_layout(layout)
        .dry_run(dry_run);

    let report = sync
        .run()
        .with_context(|| format!("theme update failed in {}", cli.root.display()))?;

    if !cli.quiet {
        let use_color = console::Term::stdout().features().colors_supported();
        print!("{}", output::render_report(&report, dry_run, use_color));
    }

    if cli.check && !report.is_up_to_date() {
        let stale = report.changed_documents().count();
        bail!("{stale} stylesheet(s) out of date with {}", cli.config.display());
    }
    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
