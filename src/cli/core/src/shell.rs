/* src/cli/core/src/shell.rs */

// Child-process helpers for the compilation step.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::ui::{self, DIM, RESET};

/// Run an external tool, bail on failure (shows both stdout and stderr).
pub(crate) fn run_tool(program: &str, args: &[String], cwd: &Path, label: &str) -> Result<()> {
  ui::detail(&format!("{DIM}{program} {}{RESET}", args.join(" ")));
  let output = Command::new(program)
    .args(args)
    .current_dir(cwd)
    .output()
    .with_context(|| format!("failed to run {label}"))?;
  if !output.status.success() {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut msg = format!("{label} exited with status {}", output.status);
    if !stderr.is_empty() {
      msg.push('\n');
      msg.push_str(&stderr);
    }
    if !stdout.is_empty() {
      msg.push('\n');
      msg.push_str(&stdout);
    }
    bail!("{msg}");
  }
  Ok(())
}

/// Resolve a path inside node_modules by walking up parent directories,
/// mirroring Node.js module resolution.
pub(crate) fn resolve_node_module(start: &Path, suffix: &str) -> Option<PathBuf> {
  let mut dir = start.to_path_buf();
  loop {
    let candidate = dir.join("node_modules").join(suffix);
    if candidate.exists() {
      return Some(candidate);
    }
    if !dir.pop() {
      return None;
    }
  }
}

/// Check if a command exists on PATH.
pub(crate) fn which_exists(cmd: &str) -> bool {
  Command::new("which")
    .arg(cmd)
    .stdout(std::process::Stdio::null())
    .stderr(std::process::Stdio::null())
    .status()
    .map(|s| s.success())
    .unwrap_or(false)
}
