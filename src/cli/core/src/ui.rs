/* src/cli/core/src/ui.rs */

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::Result;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
  VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  println!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  println!("  {YELLOW}!{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

/// Detail line shown only when --verbose is set.
pub fn verbose(msg: &str) {
  if VERBOSE.load(Ordering::Relaxed) {
    println!("        {DIM}{msg}{RESET}");
  }
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}Glyph{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

/// Run one pipeline stage under a named timing boundary. The label and
/// duration are logged at verbose level; errors pass through untouched.
pub async fn timed<T>(label: &str, task: impl Future<Output = Result<T>>) -> Result<T> {
  let started = Instant::now();
  let value = task.await?;
  verbose(&format!("{label} ({:.1?})", started.elapsed()));
  Ok(value)
}
