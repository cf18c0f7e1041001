use std::{
  io,
  path::{Path, PathBuf},
};

/// Read-only view of a directory tree, the only filesystem access alias resolution needs.
pub trait FileSystem: Send + Sync {
  fn exists(&self, path: &Path) -> bool;

  /// Lists the regular files below `dir`.
  ///
  /// - `max_depth` of `Some(1)` only yields direct children, `None` walks the whole tree.
  /// - Paths are returned joined onto `dir`, in no particular order.
  fn walk_files(&self, dir: &Path, max_depth: Option<usize>) -> io::Result<Vec<PathBuf>>;
}
