/* src/cli/core/src/convert/model.rs */

use anyhow::Result;
use glyph_codegen::{SvgDefinition, enum_definition, interface_definition, type_definition};

use super::config::{ConvertConfig, ModelConfig};
use crate::files::{self, FileKind};

/// Render and write `{icons_dir}/{model_file}.ts`; when an additional path
/// is configured, the identical content is written there too. Returns the
/// rendered content so the duplicate never regenerates it.
pub async fn write_model(
  config: &ConvertConfig,
  model: &ModelConfig,
  definitions: &[SvgDefinition],
) -> Result<String> {
  let mut content = String::new();
  if model.generate_type {
    content.push_str(&type_definition(&config.interface, definitions));
  }
  content.push_str(&interface_definition(
    &config.interface,
    model.generate_type,
    config.mode.is_tsx(),
  ));
  content.push_str(&enum_definition(&config.interface, definitions));

  files::write_file(&config.icons_dir(), &config.model_file, &content, FileKind::Ts).await?;
  if let Some(extra_dir) = &model.additional_path {
    files::write_file(extra_dir, &config.model_file, &content, FileKind::Ts).await?;
  }
  Ok(content)
}
