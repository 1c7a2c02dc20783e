//! A task runner using the [xtask spec][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{bail, Context as _, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, pushd};

fn show_help() {
  print!("{}", include_str!("help.txt"));
}

fn finish_args(args: Arguments) -> Result<()> {
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {args:?}");
  }
  Ok(())
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let Some(subcommand) = args.subcommand()? else {
    show_help();
    return Ok(());
  };
  finish_args(args)?;
  let root = Path::new(env!("CARGO_MANIFEST_DIR")).parent().context("no workspace root")?;
  let _d = pushd(root)?;
  match subcommand.as_str() {
    "ci" => {
      cmd!("cargo test --no-run").run()?;
      cmd!("cargo fmt -- --check").run()?;
      cmd!("cargo clippy").run()?;
      cmd!("cargo test").run()?;
    }
    "fmt" => cmd!("cargo fmt").run()?,
    "test" => cmd!("cargo test --workspace").run()?,
    s => bail!("unknown subcommand: {s}"),
  }
  Ok(())
}

fn main() {
  if let Err(e) = run() {
    eprintln!("{e:#}");
    std::process::exit(1);
  }
}
