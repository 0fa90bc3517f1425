//! Static export of the landing page
//!
//! ```bash
//! neurorastreio-export --out dist/index.html --config site.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use neurorastreio_landing::{export_page, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "neurorastreio-export")]
#[command(about = "Render the NeuroRastreio landing page to a static HTML file")]
#[command(version)]
struct Args {
    /// Output HTML file (parent directories are created)
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Site configuration (TOML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("neurorastreio-export v{}", env!("CARGO_PKG_VERSION"));

    let config = SiteConfig::load_or_default(args.config.as_deref())
        .context("failed to load site config")?;
    let bytes = export_page(&config, &args.out)
        .with_context(|| format!("failed to export page to {}", args.out.display()))?;

    info!("Wrote {} bytes to {}", bytes, args.out.display());
    Ok(())
}
