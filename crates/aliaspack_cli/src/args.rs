use std::path::PathBuf;

use clap::Args;

use crate::types::build_mode::BuildMode;

#[derive(Args)]
pub struct InputArgs {
  /// Project root, defaults to the current directory.
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// JSON file with alias options. A relative `cwd` in it is resolved against the file's directory,
  /// which is also the project root when `cwd` is omitted. `--cwd` still overrides it.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  /// Source directory, relative to the project root.
  #[clap(long)]
  pub src: Option<PathBuf>,

  #[clap(long, short = 'm')]
  pub mode: Option<BuildMode>,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Print the whole resolve section as JSON instead of a listing.
  #[clap(long)]
  pub json: bool,

  /// Don't print warnings.
  #[clap(long, short = 's')]
  pub silent: bool,
}
