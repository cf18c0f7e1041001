use std::path::{Path, PathBuf};

use aliaspack_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// Alias key to absolute path, as handed to a module resolver's `alias` option.
///
/// Keys are unique and the last write wins. Insertion order only keeps printed output stable,
/// equality ignores it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasTable(FxIndexMap<String, PathBuf>);

/// A key whose value was replaced while merging two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwritten {
  pub key: String,
  pub previous: PathBuf,
  pub current: PathBuf,
}

impl AliasTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&Path> {
    self.0.get(key).map(PathBuf::as_path)
  }

  /// Returns the previous value of `key`, if any.
  pub fn insert(&mut self, key: String, path: PathBuf) -> Option<PathBuf> {
    self.0.insert(key, path)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
    self.0.iter().map(|(key, path)| (key.as_str(), path.as_path()))
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  /// Merges `overrides` into `self`. Entries of `overrides` win, and every key that ended up
  /// pointing somewhere else is reported.
  pub fn extend_with(&mut self, overrides: AliasTable) -> Vec<Overwritten> {
    let mut overwritten = vec![];
    for (key, current) in overrides {
      if let Some(previous) = self.0.insert(key.clone(), current.clone()) {
        if previous != current {
          overwritten.push(Overwritten { key, previous, current });
        }
      }
    }
    overwritten
  }
}

impl IntoIterator for AliasTable {
  type Item = (String, PathBuf);
  type IntoIter = indexmap::map::IntoIter<String, PathBuf>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl FromIterator<(String, PathBuf)> for AliasTable {
  fn from_iter<T: IntoIterator<Item = (String, PathBuf)>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}

/// Layers `overrides` on top of `base`. Not commutative: on a shared key the value of `overrides` wins.
pub fn merge_alias_tables(mut base: AliasTable, overrides: AliasTable) -> AliasTable {
  base.extend_with(overrides);
  base
}

#[cfg(test)]
fn table(entries: &[(&str, &str)]) -> AliasTable {
  entries.iter().map(|(key, path)| ((*key).to_string(), PathBuf::from(path))).collect()
}

#[test]
fn test_merge_alias_tables_prefers_overrides() {
  let base = table(&[("plugin", "/project/src/conf/plugin.js"), ("conf/app", "/project/src/conf/app.js")]);
  let overrides = table(&[("plugin", "/project/src/plugin"), ("src", "/project/src")]);

  let merged = merge_alias_tables(base.clone(), overrides.clone());
  assert_eq!(merged.len(), 3);
  assert_eq!(merged.get("plugin"), Some(Path::new("/project/src/plugin")));
  assert_eq!(merged.get("conf/app"), Some(Path::new("/project/src/conf/app.js")));

  let reversed = merge_alias_tables(overrides, base);
  assert_eq!(reversed.get("plugin"), Some(Path::new("/project/src/conf/plugin.js")));
}

#[test]
fn test_merge_alias_tables_is_associative() {
  let a = table(&[("x", "/a/x"), ("y", "/a/y")]);
  let b = table(&[("y", "/b/y"), ("z", "/b/z")]);
  let c = table(&[("z", "/c/z"), ("x", "/c/x")]);

  assert_eq!(
    merge_alias_tables(merge_alias_tables(a.clone(), b.clone()), c.clone()),
    merge_alias_tables(a, merge_alias_tables(b, c))
  );
}

#[test]
fn test_extend_with_reports_changed_keys_only() {
  let mut base = table(&[("redux", "/project/node_modules/redux/lib/index.js"), ("js", "/project/src/js")]);
  let overwritten = base.extend_with(table(&[
    ("redux", "/project/vendor/redux.js"),
    ("js", "/project/src/js"),
    ("img", "/project/src/img"),
  ]));

  assert_eq!(
    overwritten,
    vec![Overwritten {
      key: "redux".to_string(),
      previous: PathBuf::from("/project/node_modules/redux/lib/index.js"),
      current: PathBuf::from("/project/vendor/redux.js"),
    }]
  );
  assert_eq!(base.len(), 3);
}

#[test]
fn test_alias_table_serializes_as_object() {
  let json = serde_json::to_string(&table(&[("src", "/project/src")])).unwrap();
  assert_eq!(json, r#"{"src":"/project/src"}"#);
}
