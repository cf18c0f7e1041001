pub mod build_mode;
pub mod category_options;
pub mod normalized_alias_options;

use std::path::PathBuf;

use aliaspack_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use crate::{BuildMode, CategoryOptions};

/// User facing options. Every field is optional, see `NormalizedAliasOptions` for the defaults.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AliasOptions {
  // --- Project layout
  pub cwd: Option<PathBuf>,
  pub src: Option<PathBuf>,
  pub node_modules: Option<PathBuf>,
  pub mode: Option<BuildMode>,

  // --- Aliases
  pub categories: Option<Vec<CategoryOptions>>,
  pub libraries: Option<FxIndexMap<String, PathBuf>>,
  pub paths: Option<FxIndexMap<String, PathBuf>>,

  // --- Resolve
  pub extensions: Option<Vec<String>>,
  pub modules: Option<Vec<PathBuf>>,

  // --- Output
  pub public_path: Option<String>,
  pub dev_public_path: Option<String>,
}

#[test]
fn test_deserialize_alias_options() {
  let options: AliasOptions = serde_json::from_str(
    r#"{
      "src": "app",
      "mode": "prod",
      "categories": [{ "name": "stores", "pattern": "[src]/stores/*.js", "id": "(stores/[^/]+)\\.js$" }],
      "libraries": { "vue": "node_modules/vue/dist/vue.esm.js" },
      "publicPath": "//cdn.example.com/"
    }"#,
  )
  .unwrap();

  assert_eq!(options.src, Some(PathBuf::from("app")));
  assert_eq!(options.mode, Some(BuildMode::Production));
  assert_eq!(options.categories.as_ref().map(Vec::len), Some(1));
  assert_eq!(options.libraries.unwrap()["vue"], PathBuf::from("node_modules/vue/dist/vue.esm.js"));
  assert_eq!(options.public_path.as_deref(), Some("//cdn.example.com/"));
  assert!(options.paths.is_none());

  assert!(serde_json::from_str::<AliasOptions>(r#"{ "alias": {} }"#).is_err());
}
