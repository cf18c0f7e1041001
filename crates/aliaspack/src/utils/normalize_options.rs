use std::path::PathBuf;

use aliaspack_common::{AliasOptions, CategoryOptions, NormalizedAliasOptions, StaticAliases};
use aliaspack_utils::{indexmap::FxIndexMap, path_ext::PathExt};
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: AliasOptions) -> NormalizedAliasOptions {
  let cwd = raw_options.cwd.map_or_else(
    || std::env::current_dir().expect("Failed to get current dir"),
    |cwd| cwd.absolutize(),
  );
  // Canonical when the directory exists, otherwise keep the lexical form.
  let cwd = dunce::canonicalize(&cwd).unwrap_or(cwd);

  let src = raw_options.src.map_or_else(|| cwd.join("src"), |src| src.absolutize_from(&cwd));
  let node_modules = raw_options
    .node_modules
    .map_or_else(|| cwd.join("node_modules"), |dir| dir.absolutize_from(&cwd));

  let (src_slash, root_slash) = (src.expect_to_slash(), cwd.expect_to_slash());
  let categories = raw_options
    .categories
    .unwrap_or_else(CategoryOptions::defaults)
    .into_iter()
    .map(|category| category.expand_placeholders(&src_slash, &root_slash))
    .collect();

  let absolutize_all = |entries: FxIndexMap<String, PathBuf>| -> FxIndexMap<String, PathBuf> {
    entries.into_iter().map(|(key, path)| (key, path.absolutize_from(&cwd))).collect()
  };
  let static_aliases = StaticAliases {
    libraries: raw_options
      .libraries
      .map_or_else(|| StaticAliases::default_libraries(&node_modules), absolutize_all),
    paths: raw_options
      .paths
      .map_or_else(|| StaticAliases::default_paths(&cwd, &src), absolutize_all),
  };

  let modules = raw_options.modules.map_or_else(
    || vec![node_modules.clone(), src.clone()],
    |modules| modules.into_iter().map(|dir| dir.absolutize_from(&cwd)).collect(),
  );

  NormalizedAliasOptions {
    mode: raw_options.mode.unwrap_or_default(),
    categories,
    static_aliases,
    extensions: raw_options
      .extensions
      .unwrap_or_else(|| vec![".js".to_string(), ".jsx".to_string()]),
    modules,
    public_path: raw_options.public_path.unwrap_or_else(|| "/".to_string()),
    dev_public_path: raw_options.dev_public_path.unwrap_or_else(|| "/".to_string()),
    cwd,
    src,
    node_modules,
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use aliaspack_common::{AliasOptions, BuildMode, CategoryOptions};
  use aliaspack_utils::{indexmap::FxIndexMap, path_ext::PathExt};

  use super::normalize_options;

  // Not expected to exist, so `dunce::canonicalize` leaves it untouched.
  fn root() -> PathBuf {
    std::env::temp_dir().join("aliaspack-normalize-options")
  }

  #[test]
  fn fills_in_project_convention() {
    let root = root();
    let options = normalize_options(AliasOptions { cwd: Some(root.clone()), ..Default::default() });

    assert_eq!(options.src, root.join("src"));
    assert_eq!(options.node_modules, root.join("node_modules"));
    assert_eq!(options.mode, BuildMode::Development);
    assert_eq!(options.extensions, [".js", ".jsx"]);
    assert_eq!(options.modules, [root.join("node_modules"), root.join("src")]);
    assert_eq!(options.categories.len(), 5);
    assert!(options.categories[0].pattern.ends_with("/src/conf/*.js"));
    assert!(!options.categories.iter().any(|category| category.pattern.contains("[src]")));
    assert_eq!(options.static_aliases.paths["component"], root.join("component"));
    assert_eq!(options.public_path_for_mode(), "/");
  }

  #[test]
  fn resolves_overrides_against_cwd() {
    let root = root();
    let mut paths = FxIndexMap::default();
    paths.insert("shared".to_string(), PathBuf::from("../shared"));

    let options = normalize_options(AliasOptions {
      cwd: Some(root.clone()),
      src: Some(PathBuf::from("app")),
      mode: Some(BuildMode::Production),
      categories: Some(vec![CategoryOptions::new("stores", "[src]/stores/*.js", r"(stores/\w+)")]),
      paths: Some(paths),
      public_path: Some("//cdn.example.com/".to_string()),
      dev_public_path: Some("/dev/".to_string()),
      ..Default::default()
    });

    assert_eq!(options.src, root.join("app"));
    assert_eq!(
      options.categories[0].pattern,
      format!("{}/stores/*.js", root.join("app").expect_to_slash())
    );
    assert_eq!(options.static_aliases.paths["shared"], root.parent().unwrap().join("shared"));
    assert_eq!(options.static_aliases.libraries.len(), 4);
    assert_eq!(options.public_path_for_mode(), "//cdn.example.com/");
    assert_eq!(options.html_template(), root.join("app").join("pages").join("app.html"));
  }
}
