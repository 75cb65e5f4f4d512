/* src/cli/core/src/convert/run.rs */

// The conversion pipeline. Stages run strictly in order; only the per-icon
// writes inside stage 3 overlap. A failure in any stage aborts the rest and
// leaves already-written files on disk.

use std::time::Instant;

use anyhow::Result;
use glyph_codegen::complete_icon_set;

use super::barrel;
use super::compile;
use super::config::ConvertConfig;
use super::icons;
use super::model;
use crate::files::{self, FileKind};
use crate::ingest;
use crate::ui;

pub async fn run_convert(config: &ConvertConfig) -> Result<()> {
  let started = Instant::now();
  let icons_dir = config.icons_dir();

  ui::timed("reset icons folder", async { files::delete_folder(&icons_dir) }).await?;

  let definitions =
    ui::timed("read svg sources", async { ingest::read_svg_definitions(config) }).await?;
  ui::arrow(&format!("{} svg files in {}", definitions.len(), config.input_dir.display()));

  let mut generated_files =
    ui::timed("generate icon constants", icons::generate_icon_files(config, &definitions)).await?;

  if let Some(set_name) = &config.icon_set {
    ui::timed("generate complete icon set", async {
      let content = complete_icon_set(
        &definitions,
        config.model.as_ref().map(|_| config.interface.as_str()),
        &config.model_file,
        config.mode.is_tsx(),
      );
      files::write_file(&icons_dir, set_name, &content, FileKind::Ts).await?;
      Ok(())
    })
    .await?;
    generated_files.push(set_name.clone());
  }

  ui::timed("assemble barrel file", barrel::write_barrel(config, &generated_files)).await?;

  if let Some(model_config) = &config.model {
    ui::timed("generate model file", async {
      model::write_model(config, model_config, &definitions).await.map(|_| ())
    })
    .await?;
  }

  if let Some(compile_config) = &config.compile {
    ui::timed("compile generated sources", async {
      compile::run_compile(config, compile_config)
    })
    .await?;
  }

  ui::ok(&format!(
    "converted {} icons into {} ({:.1}s)",
    definitions.len(),
    config.output_dir.display(),
    started.elapsed().as_secs_f64()
  ));
  Ok(())
}
