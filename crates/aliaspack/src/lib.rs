mod alias_builder;
mod types;
mod utils;

pub use crate::{alias_builder::AliasBuilder, types::alias_output::AliasOutput};
pub use aliaspack_common::*;
pub use aliaspack_error::{AliasError, BuildError, BuildResult};
pub use aliaspack_fs::{FileSystem, OsFileSystem};
pub use aliaspack_resolver::{AliasResolver, ResolvedAliases, resolve_aliases};
