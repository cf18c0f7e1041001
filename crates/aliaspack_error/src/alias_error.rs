use std::path::PathBuf;

/// Failures of alias assembly. Every variant is fatal: no partial alias table is produced.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
  /// A file matched the glob of `category` but its path does not satisfy the id pattern.
  #[error("[{category}] \"{}\" does not match id pattern /{pattern}/", .path.display())]
  PatternMismatch { category: String, path: PathBuf, pattern: String },

  /// A file matched the glob of `category` but its name can't be turned into an alias key.
  #[error("[{category}] \"{}\" is not valid UTF-8", .path.display())]
  NonUtf8Path { category: String, path: PathBuf },

  #[error("[{category}] invalid id pattern /{pattern}/: {reason}")]
  InvalidIdPattern { category: String, pattern: String, reason: String },

  #[error("[{category}] invalid glob \"{glob}\"")]
  InvalidGlob { category: String, glob: String },

  #[error("failed to read \"{}\": {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl AliasError {
  pub fn category(&self) -> Option<&str> {
    match self {
      Self::PatternMismatch { category, .. }
      | Self::NonUtf8Path { category, .. }
      | Self::InvalidIdPattern { category, .. }
      | Self::InvalidGlob { category, .. } => Some(category),
      Self::Io { .. } => None,
    }
  }
}

#[test]
fn test_pattern_mismatch_message() {
  let error = AliasError::PatternMismatch {
    category: "reducers".to_string(),
    path: PathBuf::from("/project/src/js/reducers/README.md"),
    pattern: r"(reducers/[^/]+)\.js".to_string(),
  };

  assert_eq!(
    error.to_string(),
    r#"[reducers] "/project/src/js/reducers/README.md" does not match id pattern /(reducers/[^/]+)\.js/"#
  );
  assert_eq!(error.category(), Some("reducers"));
}
