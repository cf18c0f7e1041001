use std::path::PathBuf;

use serde::Serialize;

use crate::AliasTable;

/// The `resolve` section handed over to the bundler.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveConfig {
  /// Lets imports omit these extensions.
  pub extensions: Vec<String>,
  pub modules: Vec<PathBuf>,
  pub alias: AliasTable,
}
