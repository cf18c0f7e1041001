use std::{
  borrow::Cow,
  path::{Path, PathBuf},
};

use itertools::Itertools;
use sugar_path::SugarPath;

use aliaspack_common::{AliasTable, AliasWarning, PatternSpec};
use aliaspack_error::{AliasError, BuildResult};
use aliaspack_fs::{FileSystem, OsFileSystem};
use aliaspack_utils::glob::{GlobParts, escape_glob, split_glob};

#[derive(Debug)]
pub struct AliasResolver<F: FileSystem + Default = OsFileSystem> {
  cwd: PathBuf,
  fs: F,
}

/// The aliases of a single category.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResolvedAliases {
  pub table: AliasTable,
  /// Keys produced by more than one file. The table holds the file that came last in scan order.
  pub duplicates: Vec<AliasWarning>,
}

impl<F: FileSystem + Default> AliasResolver<F> {
  /// `cwd` anchors base-relative globs.
  pub fn new(cwd: PathBuf, fs: F) -> Self {
    Self { cwd, fs }
  }

  /// Expands `spec.glob` into the regular files it matches, sorted by path.
  pub fn match_files(&self, spec: &PatternSpec) -> Result<Vec<PathBuf>, AliasError> {
    if spec.glob.trim().is_empty() {
      return Err(AliasError::InvalidGlob { category: spec.name.clone(), glob: spec.glob.clone() });
    }

    let glob = if Path::new(&spec.glob).is_absolute() {
      spec.glob.clone()
    } else {
      // The cwd is a literal path, its characters must not act as wildcards.
      let cwd = self.cwd.to_slash_lossy();
      format!("{}/{}", escape_glob(cwd.trim_end_matches('/')), spec.glob.trim_start_matches("./"))
    };
    let GlobParts { base, pattern, max_depth } = split_glob(&glob);
    let base = Path::new(&base).normalize();

    // A category whose directory doesn't exist simply contributes nothing.
    if !self.fs.exists(&base) {
      return Ok(vec![]);
    }

    let files = self
      .fs
      .walk_files(&base, max_depth)
      .map_err(|source| AliasError::Io { path: base.clone(), source })?;

    Ok(
      files
        .into_iter()
        .filter(|file| {
          // A non UTF-8 name still reaches key extraction, which reports it.
          let relative = file.strip_prefix(&base).unwrap_or(file).to_slash_lossy();
          fast_glob::glob_match(pattern, &*relative)
        })
        .sorted()
        .collect(),
    )
  }

  /// Derives one alias per file matched by `spec.glob`.
  ///
  /// - The key is the capture of `spec.id` applied to the slash form of the absolute path,
  ///   the value is the absolute path itself.
  /// - Every matched file has to satisfy `spec.id`. All offending files are reported at once.
  /// - Duplicate keys resolve to the file that sorts last and are reported as warnings.
  pub fn resolve(&self, spec: &PatternSpec) -> BuildResult<ResolvedAliases> {
    let files = self.match_files(spec)?;

    let mut resolved = ResolvedAliases::default();
    let mut errors = vec![];

    for file in files {
      let Some(slash) = file.to_slash().map(Cow::into_owned) else {
        errors.push(AliasError::NonUtf8Path { category: spec.name.clone(), path: file });
        continue;
      };

      let Some(key) = spec.id.extract(&slash) else {
        errors.push(AliasError::PatternMismatch {
          category: spec.name.clone(),
          path: file,
          pattern: spec.id.as_str().to_string(),
        });
        continue;
      };

      if let Some(previous) = resolved.table.insert(key.clone(), file.clone()) {
        resolved.duplicates.push(AliasWarning::DuplicateKey {
          category: spec.name.clone(),
          key,
          previous,
          current: file,
        });
      }
    }

    if !errors.is_empty() {
      return Err(errors.into());
    }

    Ok(resolved)
  }
}

/// Resolves a single category against the real filesystem.
pub fn resolve_aliases(cwd: &Path, spec: &PatternSpec) -> BuildResult<AliasTable> {
  AliasResolver::new(cwd.to_path_buf(), OsFileSystem).resolve(spec).map(|resolved| resolved.table)
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use aliaspack_common::{AliasTable, AliasWarning, ExtractionRule, PatternSpec};
  use aliaspack_error::AliasError;
  use aliaspack_fs::MemoryFileSystem;

  use super::AliasResolver;

  fn resolver(files: &[&str]) -> AliasResolver<MemoryFileSystem> {
    let files = files.iter().map(|path| (*path, "")).collect::<Vec<_>>();
    AliasResolver::new(PathBuf::from("/project"), MemoryFileSystem::new(&files))
  }

  fn spec(name: &str, glob: &str, id: &str) -> PatternSpec {
    PatternSpec::new(name, glob, ExtractionRule::new(id).unwrap())
  }

  fn table(entries: &[(&str, &str)]) -> AliasTable {
    entries.iter().map(|(key, path)| ((*key).to_string(), PathBuf::from(path))).collect()
  }

  #[test]
  fn derives_keys_from_capture() {
    let resolver = resolver(&[
      "/project/src/js/reducers/user.js",
      "/project/src/js/reducers/cart.js",
      "/project/src/js/actions/user.js",
    ]);

    let resolved = resolver
      .resolve(&spec("reducers", "/project/src/js/reducers/*", r"(reducers/[^/]+)\.js"))
      .unwrap();

    assert_eq!(
      resolved.table,
      table(&[
        ("reducers/user", "/project/src/js/reducers/user.js"),
        ("reducers/cart", "/project/src/js/reducers/cart.js"),
      ])
    );
    assert!(resolved.duplicates.is_empty());
  }

  #[test]
  fn component_directories_use_their_index() {
    let resolver = resolver(&[
      "/project/src/components/alert/index.js",
      "/project/src/components/alert/style.scss",
      "/project/src/components/modal/index.js",
      "/project/src/components/README.md",
    ]);

    let resolved = resolver
      .resolve(&spec("components", "/project/src/components/*/index.js", r"(components/[^/]+)"))
      .unwrap();

    assert_eq!(
      resolved.table,
      table(&[
        ("components/alert", "/project/src/components/alert/index.js"),
        ("components/modal", "/project/src/components/modal/index.js"),
      ])
    );
  }

  #[test]
  fn relative_globs_are_anchored_at_cwd() {
    let resolver = resolver(&["/project/src/conf/app.js", "/project/src/conf/env.json"]);

    let table = resolver.resolve(&spec("conf", "src/conf/*.js", r"(conf/[^/]+)\.js$")).unwrap().table;

    assert_eq!(table.get("conf/app"), Some(Path::new("/project/src/conf/app.js")));
    assert_eq!(table.len(), 1);
  }

  #[test]
  fn globstar_walks_nested_directories() {
    let resolver = resolver(&[
      "/project/src/js/filters/date.js",
      "/project/src/js/filters/money/currency.js",
      "/project/src/js/filters/money/nested/deep.js",
    ]);

    let table = resolver
      .resolve(&spec("filters", "/project/src/js/filters/**/*.js", r"filters/(.+)\.js$"))
      .unwrap()
      .table;

    assert_eq!(
      table.keys().collect::<Vec<_>>(),
      ["date", "money/currency", "money/nested/deep"]
    );
  }

  #[test]
  fn empty_match_is_not_an_error() {
    let resolver = resolver(&["/project/src/js/reducers/user.js"]);

    let missing_dir =
      resolver.resolve(&spec("filters", "/project/src/js/filters/*", r"(filters/[^/]+)\.js")).unwrap();
    assert!(missing_dir.table.is_empty());

    let no_match =
      resolver.resolve(&spec("reducers", "/project/src/js/reducers/*.ts", r"(reducers/[^/]+)\.ts")).unwrap();
    assert!(no_match.table.is_empty());
  }

  #[test]
  fn mismatching_files_are_fatal() {
    let resolver = resolver(&[
      "/project/src/js/reducers/README.md",
      "/project/src/js/reducers/notes.txt",
      "/project/src/js/reducers/user.js",
    ]);

    let errors = resolver
      .resolve(&spec("reducers", "/project/src/js/reducers/*", r"(reducers/[^/]+)\.js"))
      .unwrap_err();

    let mismatched = errors
      .alias_errors()
      .map(|error| match error {
        AliasError::PatternMismatch { category, path, .. } => {
          assert_eq!(category, "reducers");
          path.clone()
        }
        other => panic!("unexpected error {other}"),
      })
      .collect::<Vec<_>>();

    assert_eq!(
      mismatched,
      [
        PathBuf::from("/project/src/js/reducers/README.md"),
        PathBuf::from("/project/src/js/reducers/notes.txt"),
      ]
    );
  }

  #[test]
  fn duplicate_keys_keep_the_last_file() {
    let resolver = resolver(&["/project/src/lang/zh/app.js", "/project/src/lang/en/app.js"]);

    let resolved = resolver.resolve(&spec("lang", "/project/src/lang/*/*.js", r"([^/]+)\.js$")).unwrap();

    assert_eq!(resolved.table, table(&[("app", "/project/src/lang/zh/app.js")]));
    assert_eq!(
      resolved.duplicates,
      vec![AliasWarning::DuplicateKey {
        category: "lang".to_string(),
        key: "app".to_string(),
        previous: PathBuf::from("/project/src/lang/en/app.js"),
        current: PathBuf::from("/project/src/lang/zh/app.js"),
      }]
    );
  }

  #[test]
  fn cwd_with_glob_characters_is_matched_literally() {
    for cwd in ["/shop [v2]", "/shop{old}", "/shop!"] {
      let file = format!("{cwd}/src/js/reducers/user.js");
      let resolver = AliasResolver::new(PathBuf::from(cwd), MemoryFileSystem::new(&[(file.as_str(), "")]));

      let table = resolver
        .resolve(&spec("reducers", "src/js/reducers/*", r"(reducers/[^/]+)\.js"))
        .unwrap()
        .table;

      assert_eq!(table.get("reducers/user"), Some(Path::new(&file)), "{cwd}");
    }
  }

  #[test]
  fn resolving_twice_is_idempotent() {
    let resolver = resolver(&["/project/src/js/actions/user.js", "/project/src/js/actions/cart.js"]);
    let spec = spec("actions", "/project/src/js/actions/*", r"(actions/[^/]+)\.js");

    assert_eq!(resolver.resolve(&spec).unwrap(), resolver.resolve(&spec).unwrap());
  }

  #[test]
  fn blank_glob_is_rejected() {
    let resolver = resolver(&[]);

    let errors = resolver.resolve(&spec("conf", "  ", r"(conf)")).unwrap_err();

    assert!(matches!(errors.alias_errors().next(), Some(AliasError::InvalidGlob { .. })));
  }
}
