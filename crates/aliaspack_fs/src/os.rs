use std::{
  io,
  path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::file_system::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn walk_files(&self, dir: &Path, max_depth: Option<usize>) -> io::Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(dir).min_depth(1).follow_links(true).sort_by_file_name();
    if let Some(max_depth) = max_depth {
      walker = walker.max_depth(max_depth);
    }

    let mut files = vec![];
    for entry in walker {
      let entry = entry?;
      // Links are followed, so anything that is not a directory here is a file.
      if !entry.file_type().is_dir() {
        files.push(entry.into_path());
      }
    }
    Ok(files)
  }
}
