pub mod alias_table;
pub mod alias_warning;
pub mod pattern_spec;
pub mod resolve_config;
pub mod static_aliases;
