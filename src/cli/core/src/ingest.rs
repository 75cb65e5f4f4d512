/* src/cli/core/src/ingest.rs */

// SVG ingestion: scan the input directory and derive one definition per
// `.svg` file. Markup is read verbatim apart from whitespace normalization;
// optimization is left to upstream tooling.

use std::path::Path;

use anyhow::{Context, Result};
use glyph_codegen::SvgDefinition;
use walkdir::WalkDir;

use crate::convert::ConvertConfig;
use crate::ui;

pub fn read_svg_definitions(config: &ConvertConfig) -> Result<Vec<SvgDefinition>> {
  let mut definitions = Vec::new();
  for entry in WalkDir::new(&config.input_dir).sort_by_file_name() {
    let entry =
      entry.with_context(|| format!("failed to scan {}", config.input_dir.display()))?;
    if !entry.file_type().is_file() {
      continue;
    }
    let path = entry.path();
    if path.extension().and_then(|e| e.to_str()) != Some("svg") {
      continue;
    }
    definitions.push(read_definition(path, &config.prefix)?);
  }
  if definitions.is_empty() {
    ui::warn(&format!("no svg files found in {}", config.input_dir.display()));
  }
  Ok(definitions)
}

fn read_definition(path: &Path, prefix: &str) -> Result<SvgDefinition> {
  let stem = path
    .file_stem()
    .and_then(|s| s.to_str())
    .with_context(|| format!("invalid svg filename: {}", path.display()))?;
  let raw =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  Ok(SvgDefinition::new(prefix, stem, normalize_markup(&raw)))
}

/// Collapse runs of whitespace and drop the gaps between adjacent tags, so
/// multi-line editor output becomes a single-line payload.
fn normalize_markup(raw: &str) -> String {
  raw.split_whitespace().collect::<Vec<_>>().join(" ").replace("> <", "><")
}
