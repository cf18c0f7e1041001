use std::path::PathBuf;

use crate::{BuildMode, CategoryOptions, StaticAliases};

#[derive(Debug)]
pub struct NormalizedAliasOptions {
  // --- Project layout
  pub cwd: PathBuf,
  pub src: PathBuf,
  pub node_modules: PathBuf,
  pub mode: BuildMode,

  // --- Aliases
  /// Placeholders are already expanded.
  pub categories: Vec<CategoryOptions>,
  pub static_aliases: StaticAliases,

  // --- Resolve
  pub extensions: Vec<String>,
  pub modules: Vec<PathBuf>,

  // --- Output
  pub public_path: String,
  pub dev_public_path: String,
}

impl NormalizedAliasOptions {
  pub fn public_path_for_mode(&self) -> &str {
    if self.mode.is_production() { &self.public_path } else { &self.dev_public_path }
  }

  pub fn html_template(&self) -> PathBuf {
    self.mode.html_template(&self.src)
  }
}
