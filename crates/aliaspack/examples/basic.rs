use std::path::PathBuf;

use aliaspack::{AliasBuilder, AliasOptions};

fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let builder = AliasBuilder::new(AliasOptions { cwd: Some(root), ..Default::default() });

  match builder.build() {
    Ok(output) => {
      for (key, path) in output.alias().iter() {
        println!("{key} -> {}", path.display());
      }
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{error}");
      }
    }
  }
}
