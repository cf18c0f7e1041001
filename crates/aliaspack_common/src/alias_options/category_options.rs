use aliaspack_utils::glob::escape_glob;
use serde::Deserialize;

/// One alias category as written in a config file, before its id pattern is compiled.
///
/// `pattern` may use the `[src]` and `[root]` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryOptions {
  pub name: String,
  pub pattern: String,
  pub id: String,
  /// Capture group holding the alias key. When omitted the id pattern must have exactly one group.
  pub group: Option<usize>,
}

impl CategoryOptions {
  pub fn new(name: &str, pattern: &str, id: &str) -> Self {
    Self { name: name.to_string(), pattern: pattern.to_string(), id: id.to_string(), group: None }
  }

  /// The project convention, in the order its categories are merged.
  ///
  /// ```js
  /// import Alert from 'components/alert';
  /// import reducers from 'reducers/index';
  /// ```
  pub fn defaults() -> Vec<Self> {
    vec![
      Self::new("conf", "[src]/conf/*.js", r"(conf/[^/]+)\.js$"),
      Self::new("components", "[src]/components/*/index.js", r"(components/[^/]+)"),
      Self::new("reducers", "[src]/js/reducers/*", r"(reducers/[^/]+)\.js"),
      Self::new("filters", "[src]/js/filters/*", r"(filters/[^/]+)\.js"),
      Self::new("actions", "[src]/js/actions/*", r"(actions/[^/]+)\.js"),
    ]
  }

  /// Substitutes the `[src]` and `[root]` placeholders of `pattern`. Both are escaped, a directory
  /// named like `shop [v2]` is matched literally.
  #[must_use]
  pub fn expand_placeholders(mut self, src: &str, root: &str) -> Self {
    self.pattern = self.pattern.replace("[src]", &escape_glob(src)).replace("[root]", &escape_glob(root));
    self
  }
}

#[test]
fn test_expand_placeholders() {
  let category = CategoryOptions::new("shared", "[root]/component/*/index.js", "(component/[^/]+)")
    .expand_placeholders("/project/src", "/project");
  assert_eq!(category.pattern, "/project/component/*/index.js");

  let category = CategoryOptions::new("conf", "[src]/conf/*.js", r"(conf/[^/]+)\.js$")
    .expand_placeholders("/shop [v2]/src", "/shop [v2]");
  assert_eq!(category.pattern, r"/shop \[v2\]/src/conf/*.js");

  let names = CategoryOptions::defaults().into_iter().map(|category| category.name).collect::<Vec<_>>();
  assert_eq!(names, ["conf", "components", "reducers", "filters", "actions"]);
}
