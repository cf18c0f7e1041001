use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_slash(&self) -> String;

  /// Absolute and lexically normalized, relative paths are joined onto `cwd`.
  fn absolutize_from(&self, cwd: &Path) -> PathBuf;
}

impl PathExt for Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn absolutize_from(&self, cwd: &Path) -> PathBuf {
    if self.is_absolute() { self.normalize() } else { cwd.join(self).normalize() }
  }
}

/// Rewrites every `\` into `/`, so keys derived from paths read the same on every platform.
pub fn normalize_separators(value: &str) -> String {
  value.replace('\\', "/")
}

#[test]
fn test_normalize_separators() {
  assert_eq!(normalize_separators(r"components\alert"), "components/alert");
  assert_eq!(normalize_separators("reducers/user"), "reducers/user");
}

#[test]
fn test_absolutize_from() {
  let cwd = std::env::temp_dir().join("project");
  assert_eq!(Path::new("src/./js/../conf").absolutize_from(&cwd), cwd.join("src").join("conf"));

  let absolute = cwd.join("node_modules");
  assert_eq!(absolute.absolutize_from(Path::new("elsewhere")), absolute);
}
