/* src/cli/core/src/convert/icons.rs */

// Per-icon fan-out: one concurrent write task per definition, joined before
// the pipeline moves on. Each task owns its definition copy; no state is
// shared across icons.

use anyhow::Result;
use glyph_codegen::{SvgDefinition, svg_constant, tsx_constant};
use indicatif::ProgressBar;
use tokio::task::JoinSet;

use super::config::{ConvertConfig, IconMode};
use crate::files;

/// Generate one constant file per definition in the icons folder. Returns
/// the written file names in completion order, which is not guaranteed to
/// match input order. The first failed write fails the stage once every
/// task has settled; files already written stay on disk.
pub async fn generate_icon_files(
  config: &ConvertConfig,
  definitions: &[SvgDefinition],
) -> Result<Vec<String>> {
  let icons_dir = config.icons_dir();
  let mode = config.mode;
  let kind = mode.file_kind();

  let mut tasks = JoinSet::new();
  for def in definitions {
    let def = match mode {
      IconMode::Svg => def.clone(),
      IconMode::Tsx => def.component_cased(),
    };
    let dir = icons_dir.clone();
    tasks.spawn(async move {
      let file_name = def.output_name();
      let content = match mode {
        IconMode::Svg => svg_constant(&def),
        IconMode::Tsx => tsx_constant(&def),
      };
      files::write_file(&dir, &file_name, &content, kind).await?;
      Ok::<String, anyhow::Error>(file_name)
    });
  }

  let progress = ProgressBar::new(definitions.len() as u64);
  let mut names = Vec::with_capacity(definitions.len());
  let mut first_error = None;
  while let Some(joined) = tasks.join_next().await {
    progress.inc(1);
    match joined {
      Ok(Ok(name)) => names.push(name),
      Ok(Err(e)) => {
        first_error.get_or_insert(e);
      }
      Err(e) => {
        first_error.get_or_insert(e.into());
      }
    }
  }
  progress.finish_and_clear();

  match first_error {
    Some(e) => Err(e),
    None => Ok(names),
  }
}
