/* src/cli/core/src/config/types.rs */

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GlyphConfig {
  pub project: ProjectSection,
  pub input: InputSection,
  #[serde(default)]
  pub output: OutputSection,
  #[serde(default)]
  pub model: Option<ModelSection>,
  #[serde(default)]
  pub icon_set: IconSetSection,
  #[serde(default)]
  pub compile: CompileSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
  /// Directory scanned recursively for `.svg` files.
  pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
  #[serde(default = "default_out_dir")]
  pub dir: String,
  #[serde(default = "default_icons_folder")]
  pub icons_folder: String,
  #[serde(default = "default_barrel_file")]
  pub barrel_file: String,
  #[serde(default = "default_prefix")]
  pub prefix: String,
  /// Emit `.tsx` component constants instead of `.ts` string constants.
  #[serde(default)]
  pub tsx: bool,
}

impl Default for OutputSection {
  fn default() -> Self {
    Self {
      dir: default_out_dir(),
      icons_folder: default_icons_folder(),
      barrel_file: default_barrel_file(),
      prefix: default_prefix(),
      tsx: false,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSection {
  #[serde(default = "default_model_file")]
  pub file: String,
  #[serde(default = "default_interface")]
  pub interface: String,
  /// Extra directory that receives an identical copy of the model file.
  pub additional_path: Option<String>,
  #[serde(default = "default_true")]
  pub generate_type: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconSetSection {
  #[serde(default)]
  pub export: bool,
  #[serde(default = "default_icon_set_file")]
  pub file: String,
}

impl Default for IconSetSection {
  fn default() -> Self {
    Self { export: false, file: default_icon_set_file() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompileSection {
  #[serde(default)]
  pub enabled: bool,
  /// One of `esm`, `umd`, `esm-and-umd`. Checked at dispatch, not here.
  #[serde(default = "default_compile_output")]
  pub output: String,
}

impl Default for CompileSection {
  fn default() -> Self {
    Self { enabled: false, output: default_compile_output() }
  }
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn default_icons_folder() -> String {
  "icons".to_string()
}

fn default_barrel_file() -> String {
  "index".to_string()
}

fn default_prefix() -> String {
  "icon".to_string()
}

pub(crate) fn default_model_file() -> String {
  "icons.model".to_string()
}

pub(crate) fn default_interface() -> String {
  "Icon".to_string()
}

fn default_icon_set_file() -> String {
  "complete-icon-set".to_string()
}

fn default_compile_output() -> String {
  "esm".to_string()
}

fn default_true() -> bool {
  true
}
