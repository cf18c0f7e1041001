mod alias_error;

use std::ops::{Deref, DerefMut};

pub use crate::alias_error::AliasError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Iterates over the errors that are an [`AliasError`], skipping the rest.
  pub fn alias_errors(&self) -> impl Iterator<Item = &AliasError> {
    self.0.iter().filter_map(anyhow::Error::downcast_ref::<AliasError>)
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<AliasError> for BuildError {
  fn from(error: AliasError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<Vec<AliasError>> for BuildError {
  fn from(errors: Vec<AliasError>) -> Self {
    Self(errors.into_iter().map(anyhow::Error::from).collect())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_alias_errors_are_recoverable_from_build_error() {
  let mut error = BuildError::from(vec![AliasError::InvalidGlob {
    category: "conf".to_string(),
    glob: String::new(),
  }]);
  error.push(anyhow::anyhow!("unrelated"));

  assert_eq!(error.len(), 2);
  assert_eq!(error.alias_errors().count(), 1);
  assert!(matches!(error.alias_errors().next(), Some(AliasError::InvalidGlob { .. })));
}
