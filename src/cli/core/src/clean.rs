/* src/cli/core/src/clean.rs */

// `glyph clean` command: removes the generated output directory.

use std::path::Path;

use anyhow::Result;

use crate::config::GlyphConfig;
use crate::files;
use crate::ui;

pub fn run_clean(config: &GlyphConfig, base_dir: &Path) -> Result<()> {
  ui::arrow("cleaning output");
  let out_dir = base_dir.join(&config.output.dir);
  if out_dir.exists() {
    files::delete_folder(&out_dir)?;
    ui::detail(&format!("deleted {}", out_dir.display()));
  }
  ui::ok("clean complete");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(out_dir: &str) -> GlyphConfig {
    toml::from_str(&format!(
      "[project]\nname = \"t\"\n[input]\ndir = \"svg\"\n[output]\ndir = \"{out_dir}\"\n"
    ))
    .unwrap()
  }

  #[test]
  fn clean_removes_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("dist");
    std::fs::create_dir_all(out.join("icons")).unwrap();
    std::fs::write(out.join("icons/a.icon.ts"), "x").unwrap();

    run_clean(&config("dist"), tmp.path()).unwrap();
    assert!(!out.exists());
  }

  #[test]
  fn clean_noop_without_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(run_clean(&config("dist"), tmp.path()).is_ok());
  }
}
