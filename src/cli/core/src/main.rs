/* src/cli/core/src/main.rs */

mod clean;
mod config;
mod convert;
mod files;
mod ingest;
mod shell;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{GlyphConfig, find_glyph_config, load_glyph_config};
use convert::ConvertConfig;

#[derive(Parser)]
#[command(name = "glyph", about = "Glyph CLI")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Convert SVG icons into generated TypeScript sources
  Convert {
    /// Path to glyph.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log per-stage timings
    #[arg(short, long)]
    verbose: bool,
  },
  /// Remove the generated output directory
  Clean {
    /// Path to glyph.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, GlyphConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_glyph_config(&cwd)?
    }
  };
  let config = load_glyph_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Convert { config, verbose } => {
      ui::set_verbose(verbose);
      let (config_path, glyph_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      let convert_config = ConvertConfig::from_glyph_config(&glyph_config, base_dir)?;
      ui::banner("convert");
      convert::run_convert(&convert_config).await?;
    }
    Command::Clean { config } => {
      let (config_path, glyph_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      clean::run_clean(&glyph_config, base_dir)?;
    }
  }

  Ok(())
}
