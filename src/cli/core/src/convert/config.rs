/* src/cli/core/src/convert/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::config::{GlyphConfig, default_interface, default_model_file};
use crate::files::FileKind;

/// Constant emission mode, fixed once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
  Svg,
  Tsx,
}

impl IconMode {
  pub fn file_kind(self) -> FileKind {
    match self {
      Self::Svg => FileKind::Ts,
      Self::Tsx => FileKind::Tsx,
    }
  }

  pub fn is_tsx(self) -> bool {
    matches!(self, Self::Tsx)
  }
}

/// Model-generation settings; present only when a model file is configured.
#[derive(Debug, Clone)]
pub struct ModelConfig {
  pub additional_path: Option<PathBuf>,
  pub generate_type: bool,
}

/// Compilation settings; present only when compilation is enabled. The
/// output selector stays a raw string and is checked at dispatch.
#[derive(Debug, Clone)]
pub struct CompileConfig {
  pub output: String,
}

/// Immutable, path-resolved options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
  pub base_dir: PathBuf,
  pub input_dir: PathBuf,
  pub output_dir: PathBuf,
  pub icons_folder: String,
  pub barrel_file: String,
  pub prefix: String,
  pub mode: IconMode,
  /// Interface name referenced by the barrel and (when configured) the model.
  pub interface: String,
  /// Model file name referenced by the barrel even when no model is generated.
  pub model_file: String,
  pub model: Option<ModelConfig>,
  /// Complete-icon-set file name, when the aggregate export is enabled.
  pub icon_set: Option<String>,
  pub compile: Option<CompileConfig>,
}

impl ConvertConfig {
  pub fn from_glyph_config(config: &GlyphConfig, base_dir: &Path) -> Result<Self> {
    let input_dir = base_dir.join(&config.input.dir);
    if !input_dir.is_dir() {
      bail!("input directory not found: {}", input_dir.display());
    }

    let mode = if config.output.tsx { IconMode::Tsx } else { IconMode::Svg };

    let (interface, model_file, model) = match &config.model {
      Some(section) => (
        section.interface.clone(),
        section.file.clone(),
        Some(ModelConfig {
          additional_path: section.additional_path.as_ref().map(|p| base_dir.join(p)),
          generate_type: section.generate_type,
        }),
      ),
      None => (default_interface(), default_model_file(), None),
    };

    Ok(Self {
      base_dir: base_dir.to_path_buf(),
      input_dir,
      output_dir: base_dir.join(&config.output.dir),
      icons_folder: config.output.icons_folder.clone(),
      barrel_file: config.output.barrel_file.clone(),
      prefix: config.output.prefix.clone(),
      mode,
      interface,
      model_file,
      model,
      icon_set: config.icon_set.export.then(|| config.icon_set.file.clone()),
      compile: config
        .compile
        .enabled
        .then(|| CompileConfig { output: config.compile.output.clone() }),
    })
  }

  /// `{output_dir}/{icons_folder}` — where per-icon files land.
  pub fn icons_dir(&self) -> PathBuf {
    self.output_dir.join(&self.icons_folder)
  }
}
