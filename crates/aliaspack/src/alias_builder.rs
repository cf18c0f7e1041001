use aliaspack_common::{
  AliasOptions, AliasTable, AliasWarning, ExtractionRule, NormalizedAliasOptions, Overwritten,
  PatternSpec, ResolveConfig, merge_alias_tables,
};
use aliaspack_error::{AliasError, BuildResult};
use aliaspack_fs::{FileSystem, OsFileSystem};
use aliaspack_resolver::{AliasResolver, ResolvedAliases};
use aliaspack_utils::indexmap::FxIndexMap;

use crate::{types::alias_output::AliasOutput, utils::normalize_options::normalize_options};

pub struct AliasBuilder<F: FileSystem + Default = OsFileSystem> {
  pub(crate) options: NormalizedAliasOptions,
  pub(crate) resolver: AliasResolver<F>,
}

impl AliasBuilder {
  pub fn new(options: AliasOptions) -> Self {
    Self::with_file_system(options, OsFileSystem)
  }
}

impl<F: FileSystem + Default> AliasBuilder<F> {
  pub fn with_file_system(options: AliasOptions, fs: F) -> Self {
    let options = normalize_options(options);
    let resolver = AliasResolver::new(options.cwd.clone(), fs);
    Self { options, resolver }
  }

  pub fn options(&self) -> &NormalizedAliasOptions {
    &self.options
  }

  /// Compiles every configured category. Categories with a broken id pattern are reported, not skipped.
  pub fn pattern_specs(&self) -> (Vec<PatternSpec>, Vec<AliasError>) {
    let mut specs = Vec::with_capacity(self.options.categories.len());
    let mut errors = vec![];

    for category in &self.options.categories {
      let rule = match category.group {
        Some(group) => ExtractionRule::with_group(&category.id, group),
        None => ExtractionRule::new(&category.id),
      };
      match rule {
        Ok(id) => specs.push(PatternSpec::new(&category.name, &category.pattern, id)),
        Err(reason) => errors.push(AliasError::InvalidIdPattern {
          category: category.name.clone(),
          pattern: category.id.clone(),
          reason,
        }),
      }
    }

    (specs, errors)
  }

  /// Assembles the alias table.
  ///
  /// Categories are merged in their declared order, a later category overriding an earlier one.
  /// Static aliases are merged last so they can't be shadowed by anything derived from the
  /// filesystem. If any category fails, every error is returned and no table is produced.
  pub fn build(&self) -> BuildResult<AliasOutput> {
    let (specs, errors) = self.pattern_specs();
    let mut errors = errors.into_iter().map(anyhow::Error::from).collect::<Vec<_>>();

    let mut categories = Vec::with_capacity(specs.len());
    for spec in &specs {
      match self.resolver.resolve(spec) {
        Ok(resolved) => categories.push((spec.name.as_str(), resolved)),
        Err(err) => errors.extend(err.0),
      }
    }

    if !errors.is_empty() {
      return Err(errors.into());
    }

    let mut warnings = vec![];
    let mut alias = AliasTable::new();
    let mut owners = FxIndexMap::<String, &str>::default();

    for (category, ResolvedAliases { table, duplicates }) in categories {
      warnings.extend(duplicates);

      let keys = table.keys().map(ToString::to_string).collect::<Vec<_>>();
      for Overwritten { key, previous, current } in alias.extend_with(table) {
        let previous_category = owners.get(&key).copied().unwrap_or_default().to_string();
        warnings.push(AliasWarning::Shadowed {
          key,
          previous_category,
          category: category.to_string(),
          previous,
          current,
        });
      }
      owners.extend(keys.into_iter().map(|key| (key, category)));
    }

    let alias = merge_alias_tables(alias, self.options.static_aliases.to_table());

    Ok(AliasOutput {
      mode: self.options.mode,
      public_path: self.options.public_path_for_mode().to_string(),
      template: self.options.html_template(),
      resolve: ResolveConfig {
        extensions: self.options.extensions.clone(),
        modules: self.options.modules.clone(),
        alias,
      },
      warnings,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::path::{Path, PathBuf};

  use aliaspack_common::{AliasOptions, AliasWarning, CategoryOptions};
  use aliaspack_error::AliasError;
  use aliaspack_fs::MemoryFileSystem;

  use super::AliasBuilder;

  fn builder(files: &[&str], options: AliasOptions) -> AliasBuilder<MemoryFileSystem> {
    let files = files.iter().map(|path| (*path, "")).collect::<Vec<_>>();
    AliasBuilder::with_file_system(
      AliasOptions { cwd: Some(PathBuf::from("/project")), ..options },
      MemoryFileSystem::new(&files),
    )
  }

  #[test]
  fn builds_the_project_convention() {
    let builder = builder(
      &[
        "/project/src/conf/app.js",
        "/project/src/components/alert/index.js",
        "/project/src/js/reducers/user.js",
        "/project/src/js/reducers/cart.js",
        "/project/src/js/actions/user.js",
      ],
      AliasOptions::default(),
    );

    let output = builder.build().unwrap();
    let alias = output.alias();

    assert_eq!(alias.get("conf/app"), Some(Path::new("/project/src/conf/app.js")));
    assert_eq!(alias.get("components/alert"), Some(Path::new("/project/src/components/alert/index.js")));
    assert_eq!(alias.get("reducers/cart"), Some(Path::new("/project/src/js/reducers/cart.js")));
    assert_eq!(alias.get("actions/user"), Some(Path::new("/project/src/js/actions/user.js")));
    assert_eq!(alias.get("redux"), Some(Path::new("/project/node_modules/redux/lib/index.js")));
    assert_eq!(alias.get("component"), Some(Path::new("/project/component")));
    // 5 derived, 4 libraries, 6 paths. No filters directory is fine.
    assert_eq!(alias.len(), 15);
    assert!(output.warnings.is_empty());
    assert_eq!(output.template, Path::new("/project/src/pages/dev.html"));
  }

  #[test]
  fn static_aliases_win_over_derived_ones() {
    let builder = builder(
      &["/project/src/plugin/swiper.js", "/project/src/conf/app.js"],
      AliasOptions {
        categories: Some(vec![
          CategoryOptions::new("conf", "[src]/conf/*.js", r"(conf/[^/]+)\.js$"),
          CategoryOptions::new("plugins", "[src]/plugin/*.js", r"(plugin)/[^/]+\.js$"),
        ]),
        ..Default::default()
      },
    );

    let output = builder.build().unwrap();

    assert_eq!(output.alias().get("plugin"), Some(Path::new("/project/src/plugin")));
    assert!(output.warnings.is_empty());
  }

  #[test]
  fn later_categories_shadow_earlier_ones() {
    let builder = builder(
      &["/project/src/js/reducers/user.js", "/project/src/js/legacy/user.js"],
      AliasOptions {
        categories: Some(vec![
          CategoryOptions::new("reducers", "[src]/js/reducers/*.js", r"([^/]+)\.js$"),
          CategoryOptions::new("legacy", "[src]/js/legacy/*.js", r"([^/]+)\.js$"),
        ]),
        ..Default::default()
      },
    );

    let output = builder.build().unwrap();

    assert_eq!(output.alias().get("user"), Some(Path::new("/project/src/js/legacy/user.js")));
    assert_eq!(
      output.warnings,
      vec![AliasWarning::Shadowed {
        key: "user".to_string(),
        previous_category: "reducers".to_string(),
        category: "legacy".to_string(),
        previous: PathBuf::from("/project/src/js/reducers/user.js"),
        current: PathBuf::from("/project/src/js/legacy/user.js"),
      }]
    );
  }

  #[test]
  fn reports_every_failing_category() {
    let builder = builder(
      &["/project/src/js/reducers/README.md", "/project/src/js/actions/user.js"],
      AliasOptions {
        categories: Some(vec![
          CategoryOptions::new("reducers", "[src]/js/reducers/*", r"(reducers/[^/]+)\.js"),
          CategoryOptions::new("actions", "[src]/js/actions/*", r"(actions/[^/]+\.js"),
          CategoryOptions::new("filters", "[src]/js/filters/*", r"filters/[^/]+\.js"),
        ]),
        ..Default::default()
      },
    );

    let errors = builder.build().unwrap_err();
    let categories = errors.alias_errors().filter_map(AliasError::category).collect::<Vec<_>>();

    assert_eq!(errors.len(), 3);
    assert!(categories.contains(&"reducers"));
    assert!(categories.contains(&"actions"));
    assert!(categories.contains(&"filters"));
    assert!(errors.alias_errors().any(|error| matches!(error, AliasError::PatternMismatch { .. })));
  }
}
