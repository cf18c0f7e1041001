use regex::Regex;

use aliaspack_utils::path_ext::normalize_separators;

/// A regular expression that both validates a matched path and extracts its alias key.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
  regex: Regex,
  group: usize,
}

impl ExtractionRule {
  /// The pattern must contain exactly one capture group, which holds the key.
  pub fn new(pattern: &str) -> Result<Self, String> {
    let regex = Regex::new(pattern).map_err(|err| err.to_string())?;
    // Group 0 is the whole match.
    match regex.captures_len() - 1 {
      1 => Ok(Self { regex, group: 1 }),
      n => Err(format!("expected exactly one capture group, found {n}")),
    }
  }

  pub fn with_group(pattern: &str, group: usize) -> Result<Self, String> {
    let regex = Regex::new(pattern).map_err(|err| err.to_string())?;
    if group == 0 || group >= regex.captures_len() {
      return Err(format!(
        "capture group {group} does not exist, the pattern has {} group(s)",
        regex.captures_len() - 1
      ));
    }
    Ok(Self { regex, group })
  }

  pub fn as_str(&self) -> &str {
    self.regex.as_str()
  }

  /// Returns the captured key with separators normalized to `/`, or `None` if `path` doesn't match.
  pub fn extract(&self, path: &str) -> Option<String> {
    let captures = self.regex.captures(path)?;
    captures.get(self.group).map(|key| normalize_separators(key.as_str()))
  }
}

/// One category of derived aliases: every file matching `glob` gets the key `id` extracts from its path.
#[derive(Debug, Clone)]
pub struct PatternSpec {
  pub name: String,
  pub glob: String,
  pub id: ExtractionRule,
}

impl PatternSpec {
  pub fn new(name: impl Into<String>, glob: impl Into<String>, id: ExtractionRule) -> Self {
    Self { name: name.into(), glob: glob.into(), id }
  }
}

#[test]
fn test_extraction_rule() {
  let rule = ExtractionRule::new(r"(reducers/[^/]+)\.js").unwrap();
  assert_eq!(rule.extract("/project/src/js/reducers/user.js").as_deref(), Some("reducers/user"));
  assert_eq!(rule.extract("/project/src/js/reducers/notes.txt"), None);

  let rule = ExtractionRule::new(r"(components[\\/][^\\/]+)").unwrap();
  assert_eq!(
    rule.extract(r"C:\project\src\components\alert\index.js").as_deref(),
    Some("components/alert")
  );
}

#[test]
fn test_extraction_rule_group_arity() {
  assert!(ExtractionRule::new(r"reducers/[^/]+\.js").is_err());
  assert!(ExtractionRule::new(r"(reducers)/([^/]+)\.js").is_err());
  assert!(ExtractionRule::new(r"(unclosed").is_err());

  let rule = ExtractionRule::with_group(r"(src)/(pages/[^/]+)\.js", 2).unwrap();
  assert_eq!(rule.extract("/project/src/pages/home.js").as_deref(), Some("pages/home"));
  assert!(ExtractionRule::with_group(r"(src)/(pages)", 3).is_err());
  assert!(ExtractionRule::with_group(r"(src)/(pages)", 0).is_err());
}
