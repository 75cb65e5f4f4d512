/* src/cli/core/src/convert/barrel.rs */

// Barrel assembly: plain string concatenation over the generated file
// names. The barrel references files by name only -- it never checks that
// they exist, so a dangling entry surfaces downstream as a broken import.

use anyhow::Result;
use glyph_codegen::{export_statement, type_helper};

use super::config::ConvertConfig;
use crate::files::{self, FileKind};

/// Build and write `{output_dir}/{barrel_file}.ts`: the type-helper import,
/// one re-export per generated file, and the model export (unconditional,
/// even when no model file is generated).
pub async fn write_barrel(config: &ConvertConfig, generated_files: &[String]) -> Result<()> {
  let mut content = type_helper(&config.interface, &config.icons_folder, &config.model_file);
  for file_name in generated_files {
    content.push_str(&export_statement(file_name, &config.icons_folder));
  }
  content.push_str(&export_statement(&config.model_file, &config.icons_folder));
  files::write_file(&config.output_dir, &config.barrel_file, &content, FileKind::Ts).await?;
  Ok(())
}
