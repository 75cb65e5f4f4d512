/* src/cli/core/src/convert/compile.rs */

// Post-compilation dispatch: resolve the generated sources, hand them to
// tsc for the selected module format(s), then drop the TypeScript originals.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::config::{CompileConfig, ConvertConfig};
use crate::files;
use crate::shell::{resolve_node_module, run_tool, which_exists};
use crate::ui;

const VALID_OUTPUTS: &str = "esm, umd, esm-and-umd";

/// Dispatch on the configured output kind. An unrecognized selector is
/// logged as an error and skipped without failing the pipeline; compiler
/// failures propagate.
pub fn run_compile(config: &ConvertConfig, compile: &CompileConfig) -> Result<()> {
  let sources =
    files::find_generated_sources(&config.output_dir, &config.icons_folder, &config.barrel_file)?;
  match compile.output.as_str() {
    "esm" => {
      compile_to_esnext(config, &sources, &config.output_dir)?;
      files::delete_files(&sources)?;
    }
    "umd" => {
      compile_to_umd(config, &sources, &config.output_dir)?;
      files::delete_files(&sources)?;
    }
    "esm-and-umd" => {
      compile_to_esnext(config, &sources, &config.output_dir.join("esm"))?;
      compile_to_umd(config, &sources, &config.output_dir.join("umd"))?;
      files::delete_files(&sources)?;
      // Intermediate compiler artifacts land in build/; drop them with the originals.
      files::delete_folder(&config.output_dir.join("build"))?;
    }
    other => {
      ui::fail(&format!("unknown compile output \"{other}\" -- valid values: {VALID_OUTPUTS}"));
    }
  }
  Ok(())
}

fn compile_to_esnext(config: &ConvertConfig, sources: &[PathBuf], out_dir: &Path) -> Result<()> {
  run_tsc(config, sources, "esnext", out_dir)
}

fn compile_to_umd(config: &ConvertConfig, sources: &[PathBuf], out_dir: &Path) -> Result<()> {
  run_tsc(config, sources, "umd", out_dir)
}

fn run_tsc(config: &ConvertConfig, sources: &[PathBuf], module: &str, out_dir: &Path) -> Result<()> {
  let args = tsc_args(sources, module, out_dir, config.mode.is_tsx());
  match resolve_node_module(&config.base_dir, ".bin/tsc") {
    Some(tsc) => {
      let program = tsc.to_str().context("tsc path is not valid UTF-8")?;
      run_tool(program, &args, &config.base_dir, "tsc")
    }
    None if which_exists("npx") => {
      let mut npx_args = vec!["tsc".to_string()];
      npx_args.extend(args);
      run_tool("npx", &npx_args, &config.base_dir, "tsc")
    }
    None => bail!("tsc not found -- install typescript locally or make npx available"),
  }
}

fn tsc_args(sources: &[PathBuf], module: &str, out_dir: &Path, tsx: bool) -> Vec<String> {
  let mut args: Vec<String> =
    sources.iter().map(|p| p.to_string_lossy().to_string()).collect();
  args.extend(["--module".into(), module.into(), "--target".into(), "es2020".into()]);
  args.push("--declaration".into());
  if tsx {
    args.extend(["--jsx".into(), "react".into()]);
  }
  args.extend(["--outDir".into(), out_dir.to_string_lossy().to_string()]);
  args
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tsc_args_esm() {
    let sources = vec![PathBuf::from("dist/icons/a.icon.ts"), PathBuf::from("dist/index.ts")];
    let args = tsc_args(&sources, "esnext", Path::new("dist"), false);
    assert_eq!(
      args,
      vec![
        "dist/icons/a.icon.ts",
        "dist/index.ts",
        "--module",
        "esnext",
        "--target",
        "es2020",
        "--declaration",
        "--outDir",
        "dist",
      ]
    );
  }

  #[test]
  fn tsc_args_tsx_enables_jsx() {
    let args = tsc_args(&[PathBuf::from("a.icon.tsx")], "umd", Path::new("dist/umd"), true);
    assert!(args.windows(2).any(|w| w == ["--jsx", "react"]));
    assert!(args.windows(2).any(|w| w == ["--module", "umd"]));
    assert!(args.ends_with(&["--outDir".to_string(), "dist/umd".to_string()]));
  }
}
