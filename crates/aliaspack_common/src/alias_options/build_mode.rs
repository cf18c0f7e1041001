use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  #[default]
  #[serde(alias = "dev")]
  Development,
  #[serde(alias = "prod")]
  Production,
}

impl BuildMode {
  #[inline]
  pub fn is_production(&self) -> bool {
    matches!(self, Self::Production)
  }

  /// The page the HTML plugin renders: a debugging shell in development, the real app page otherwise.
  pub fn html_template(&self, src: &Path) -> PathBuf {
    let pages = src.join("pages");
    match self {
      Self::Development => pages.join("dev.html"),
      Self::Production => pages.join("app.html"),
    }
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_build_mode() {
  let parse = |mode: &str| serde_json::from_str::<BuildMode>(&format!("\"{mode}\"")).ok();
  assert_eq!(parse("prod"), Some(BuildMode::Production));
  assert_eq!(parse("development"), Some(BuildMode::Development));
  assert_eq!(parse("staging"), None);

  let src = Path::new("/project/src");
  assert_eq!(BuildMode::Development.html_template(src), src.join("pages").join("dev.html"));
  assert_eq!(BuildMode::Production.html_template(src), src.join("pages").join("app.html"));
  assert_eq!(BuildMode::Production.to_string(), "production");
}
