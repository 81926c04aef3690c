use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod renamer;

use config::{DEFAULT_PREFIX, RenameConfig};
use renamer::Renamer;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Toggle a filename prefix on every file under a directory"
)]
pub struct Cli {
    /// Directory to walk (defaults to current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Prefix to strip from names that carry it and prepend to names that don't
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Log every rename to stderr
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = match cli.root.as_deref() {
        Some(raw) => {
            let root = resolve_root(raw, &std::env::current_dir()?);
            RenameConfig::new(&root, cli.prefix)
                .with_context(|| format!("Invalid configuration for root {}", root.display()))?
        }
        None => RenameConfig::from_cwd()
            .and_then(|config| config.with_prefix(cli.prefix))
            .context("Invalid configuration for the current directory")?,
    };

    let renamer = Renamer::new(config);
    let summary = renamer
        .run()
        .with_context(|| format!("Toggling prefix under {} stopped", renamer.config().root))?;

    tracing::info!(
        root = %renamer.config().root,
        stripped = summary.stripped,
        prepended = summary.prepended,
        "renamed {} files",
        summary.total()
    );
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_root(raw: &Path, cwd: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&raw.to_string_lossy()).into_owned());
    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}
