// Turns a directory layout into alias entries: glob expansion, key extraction and per-category collisions.

mod resolver;

pub use crate::resolver::{AliasResolver, ResolvedAliases, resolve_aliases};

pub use aliaspack_common::{AliasTable, ExtractionRule, PatternSpec};
pub use aliaspack_error::AliasError;
