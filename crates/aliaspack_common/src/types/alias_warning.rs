use std::{fmt::Display, path::PathBuf};

/// A key collision that was resolved by last-write-wins. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasWarning {
  /// Two files of one category produced the same key, `current` came later in scan order.
  DuplicateKey { category: String, key: String, previous: PathBuf, current: PathBuf },
  /// A later category replaced a key derived by an earlier one.
  Shadowed {
    key: String,
    previous_category: String,
    category: String,
    previous: PathBuf,
    current: PathBuf,
  },
}

impl Display for AliasWarning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::DuplicateKey { category, key, previous, current } => write!(
        f,
        "[{category}] alias \"{key}\" matches both \"{}\" and \"{}\", using the latter",
        previous.display(),
        current.display()
      ),
      Self::Shadowed { key, previous_category, category, previous, current } => write!(
        f,
        "[{category}] alias \"{key}\" shadows \"{}\" from [{previous_category}] with \"{}\"",
        previous.display(),
        current.display()
      ),
    }
  }
}
