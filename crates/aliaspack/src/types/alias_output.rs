use std::path::PathBuf;

use aliaspack_common::{AliasTable, AliasWarning, BuildMode, ResolveConfig};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOutput {
  pub mode: BuildMode,
  pub public_path: String,
  pub template: PathBuf,
  pub resolve: ResolveConfig,
  #[serde(skip)]
  pub warnings: Vec<AliasWarning>,
}

impl AliasOutput {
  pub fn alias(&self) -> &AliasTable {
    &self.resolve.alias
  }

  pub fn to_json(&self) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}
