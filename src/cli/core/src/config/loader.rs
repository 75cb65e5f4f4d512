/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::GlyphConfig;

/// Walk upward from `start` to find `glyph.toml`, like Cargo.toml discovery.
pub fn find_glyph_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("glyph.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("glyph.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_glyph_config(path: &Path) -> Result<GlyphConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: GlyphConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  validate(&config)?;
  Ok(config)
}

fn validate(config: &GlyphConfig) -> Result<()> {
  if config.input.dir.trim().is_empty() {
    bail!("input.dir must not be empty");
  }
  if config.output.icons_folder.trim().is_empty() {
    bail!("output.icons_folder must not be empty");
  }
  if config.output.barrel_file.trim().is_empty() {
    bail!("output.barrel_file must not be empty");
  }
  Ok(())
}
