/* src/cli/core/src/files.rs */

// File-system boundary for the conversion pipeline: extension-aware writes,
// idempotent deletes, and generated-source lookup.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Extension applied to a generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
  Ts,
  Tsx,
}

impl FileKind {
  pub fn extension(self) -> &'static str {
    match self {
      Self::Ts => "ts",
      Self::Tsx => "tsx",
    }
  }
}

/// Write `{dir}/{name}.{ext}`, creating the directory if needed.
pub async fn write_file(dir: &Path, name: &str, content: &str, kind: FileKind) -> Result<PathBuf> {
  tokio::fs::create_dir_all(dir)
    .await
    .with_context(|| format!("failed to create {}", dir.display()))?;
  let path = dir.join(format!("{name}.{}", kind.extension()));
  tokio::fs::write(&path, content)
    .await
    .with_context(|| format!("failed to write {}", path.display()))?;
  Ok(path)
}

/// Delete a directory tree; missing directories are not an error.
pub fn delete_folder(path: &Path) -> Result<()> {
  if path.exists() {
    std::fs::remove_dir_all(path)
      .with_context(|| format!("failed to remove {}", path.display()))?;
  }
  Ok(())
}

pub fn delete_files(paths: &[PathBuf]) -> Result<()> {
  for path in paths {
    std::fs::remove_file(path)
      .with_context(|| format!("failed to remove {}", path.display()))?;
  }
  Ok(())
}

/// Generated TypeScript sources of one invocation: every `.ts`/`.tsx` file
/// under the icons folder plus the barrel file at the output root.
pub fn find_generated_sources(
  out_dir: &Path,
  icons_folder: &str,
  barrel_file: &str,
) -> Result<Vec<PathBuf>> {
  let mut sources = Vec::new();
  let icons_dir = out_dir.join(icons_folder);
  if icons_dir.is_dir() {
    for entry in WalkDir::new(&icons_dir).sort_by_file_name() {
      let entry = entry.with_context(|| format!("failed to scan {}", icons_dir.display()))?;
      if entry.file_type().is_file()
        && matches!(entry.path().extension().and_then(|e| e.to_str()), Some("ts" | "tsx"))
      {
        sources.push(entry.into_path());
      }
    }
  }
  let barrel = out_dir.join(format!("{barrel_file}.ts"));
  if barrel.is_file() {
    sources.push(barrel);
  }
  Ok(sources)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn write_file_applies_kind_extension() {
    let dir = tempfile::tempdir().unwrap();
    let ts = write_file(dir.path(), "a.icon", "x", FileKind::Ts).await.unwrap();
    let tsx = write_file(dir.path(), "b.icon", "x", FileKind::Tsx).await.unwrap();
    assert!(ts.ends_with("a.icon.ts"));
    assert!(tsx.ends_with("b.icon.tsx"));
    assert!(ts.is_file() && tsx.is_file());
  }

  #[tokio::test]
  async fn write_file_creates_missing_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out/icons");
    let path = write_file(&nested, "c.icon", "x", FileKind::Ts).await.unwrap();
    assert!(path.is_file());
  }

  #[test]
  fn delete_folder_noop_on_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(delete_folder(&dir.path().join("nope")).is_ok());
  }

  #[test]
  fn delete_folder_removes_tree() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("icons");
    std::fs::create_dir_all(target.join("sub")).unwrap();
    std::fs::write(target.join("sub/f.ts"), "x").unwrap();
    delete_folder(&target).unwrap();
    assert!(!target.exists());
  }

  #[test]
  fn find_generated_sources_collects_icons_and_barrel() {
    let dir = tempfile::tempdir().unwrap();
    let icons = dir.path().join("icons");
    std::fs::create_dir_all(&icons).unwrap();
    std::fs::write(icons.join("a.icon.ts"), "x").unwrap();
    std::fs::write(icons.join("b.icon.tsx"), "x").unwrap();
    std::fs::write(icons.join("notes.md"), "x").unwrap();
    std::fs::write(dir.path().join("index.ts"), "x").unwrap();

    let sources = find_generated_sources(dir.path(), "icons", "index").unwrap();
    let names: Vec<_> =
      sources.iter().map(|p| p.file_name().unwrap().to_str().unwrap().to_string()).collect();
    assert_eq!(names, vec!["a.icon.ts", "b.icon.tsx", "index.ts"]);
  }

  #[test]
  fn find_generated_sources_without_icons_dir() {
    let dir = tempfile::tempdir().unwrap();
    let sources = find_generated_sources(dir.path(), "icons", "index").unwrap();
    assert!(sources.is_empty());
  }
}
