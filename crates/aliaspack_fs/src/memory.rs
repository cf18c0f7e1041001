use std::{
  io::{self, Write},
  path::{Path, PathBuf},
};

use aliaspack_utils::path_ext::PathExt;
use vfs::{MemoryFS, VfsPath};

use crate::file_system::FileSystem;

/// An in-memory tree keyed by slash paths. Used to exercise alias resolution without touching disk.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { root: VfsPath::new(MemoryFS::new()) }
  }
}

impl MemoryFileSystem {
  /// # Panics
  ///
  /// Panics if a file can't be written into the in-memory tree.
  pub fn new(files: &[(&str, &str)]) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      fs.add_file(Path::new(path), content).expect("Failed to write into memory file system");
    }
    fs
  }

  pub fn add_file(&self, path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      self.vfs_path(parent)?.create_dir_all().map_err(io::Error::other)?;
    }
    let mut file = self.vfs_path(path)?.create_file().map_err(io::Error::other)?;
    file.write_all(content.as_bytes())
  }

  fn vfs_path(&self, path: &Path) -> io::Result<VfsPath> {
    let slash = path.expect_to_slash();
    let relative = slash.trim_start_matches('/');
    if relative.is_empty() {
      return Ok(self.root.clone());
    }
    self.root.join(relative).map_err(io::Error::other)
  }
}

impl FileSystem for MemoryFileSystem {
  fn exists(&self, path: &Path) -> bool {
    self.vfs_path(path).is_ok_and(|path| path.exists().unwrap_or(false))
  }

  fn walk_files(&self, dir: &Path, max_depth: Option<usize>) -> io::Result<Vec<PathBuf>> {
    let start = self.vfs_path(dir)?;
    let prefix_len = start.as_str().len();

    let mut files = vec![];
    for entry in start.walk_dir().map_err(io::Error::other)? {
      let entry = entry.map_err(io::Error::other)?;
      let depth = entry.as_str()[prefix_len..].matches('/').count();
      if max_depth.is_some_and(|max_depth| depth > max_depth) {
        continue;
      }
      if entry.is_file().map_err(io::Error::other)? {
        files.push(dir.join(entry.as_str()[prefix_len..].trim_start_matches('/')));
      }
    }
    Ok(files)
  }
}

#[test]
fn test_walk_files_respects_depth() {
  let fs = MemoryFileSystem::new(&[
    ("/app/src/conf/app.js", ""),
    ("/app/src/components/alert/index.js", ""),
    ("/app/src/components/alert/style.scss", ""),
  ]);

  let mut shallow = fs.walk_files(Path::new("/app/src/components"), Some(1)).unwrap();
  shallow.sort();
  assert!(shallow.is_empty());

  let mut nested = fs.walk_files(Path::new("/app/src/components"), Some(2)).unwrap();
  nested.sort();
  assert_eq!(
    nested,
    vec![
      PathBuf::from("/app/src/components/alert/index.js"),
      PathBuf::from("/app/src/components/alert/style.scss"),
    ]
  );

  assert_eq!(fs.walk_files(Path::new("/app"), None).unwrap().len(), 3);
  assert!(fs.exists(Path::new("/app/src/conf")));
  assert!(!fs.exists(Path::new("/app/src/filters")));
}
