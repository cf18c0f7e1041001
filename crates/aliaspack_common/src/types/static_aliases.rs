use std::path::{Path, PathBuf};

use aliaspack_utils::indexmap::FxIndexMap;

use crate::AliasTable;

const LIBRARIES: [&str; 4] = ["react-router", "react-redux", "redux", "redux-thunk"];

/// Explicitly authored aliases. They are merged after every derived category and always win.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticAliases {
  /// Third-party entry points.
  pub libraries: FxIndexMap<String, PathBuf>,
  /// Shortcuts to top-level project directories.
  pub paths: FxIndexMap<String, PathBuf>,
}

impl StaticAliases {
  pub fn for_project(root: &Path, src: &Path, node_modules: &Path) -> Self {
    Self { libraries: Self::default_libraries(node_modules), paths: Self::default_paths(root, src) }
  }

  pub fn default_libraries(node_modules: &Path) -> FxIndexMap<String, PathBuf> {
    LIBRARIES
      .iter()
      .map(|name| ((*name).to_string(), node_modules.join(name).join("lib").join("index.js")))
      .collect()
  }

  pub fn default_paths(root: &Path, src: &Path) -> FxIndexMap<String, PathBuf> {
    let mut paths = FxIndexMap::default();
    paths.insert("src".to_string(), src.to_path_buf());
    paths.insert("plugin".to_string(), src.join("plugin"));
    paths.insert("img".to_string(), src.join("img"));
    // Shared components live next to the source tree, not inside it.
    paths.insert("component".to_string(), root.join("component"));
    paths.insert("js".to_string(), src.join("js"));
    paths.insert("pages".to_string(), src.join("pages"));
    paths
  }

  /// Libraries first, then paths.
  pub fn to_table(&self) -> AliasTable {
    self.libraries.iter().chain(&self.paths).map(|(key, path)| (key.clone(), path.clone())).collect()
  }
}

#[test]
fn test_static_aliases_for_project() {
  let root = Path::new("/project");
  let aliases = StaticAliases::for_project(root, &root.join("src"), &root.join("node_modules"));
  let table = aliases.to_table();

  assert_eq!(table.len(), 10);
  assert_eq!(
    table.get("redux-thunk"),
    Some(root.join("node_modules").join("redux-thunk").join("lib").join("index.js").as_path())
  );
  assert_eq!(table.get("plugin"), Some(root.join("src").join("plugin").as_path()));
  assert_eq!(table.get("component"), Some(root.join("component").as_path()));
  assert_eq!(
    table.keys().collect::<Vec<_>>(),
    [
      "react-router",
      "react-redux",
      "redux",
      "redux-thunk",
      "src",
      "plugin",
      "img",
      "component",
      "js",
      "pages"
    ]
  );
}
