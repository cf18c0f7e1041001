mod alias_options;
mod types;

pub use alias_options::{
  AliasOptions, build_mode::BuildMode, category_options::CategoryOptions,
  normalized_alias_options::NormalizedAliasOptions,
};

pub use crate::types::{
  alias_table::{AliasTable, Overwritten, merge_alias_tables},
  alias_warning::AliasWarning,
  pattern_spec::{ExtractionRule, PatternSpec},
  resolve_config::ResolveConfig,
  static_aliases::StaticAliases,
};
