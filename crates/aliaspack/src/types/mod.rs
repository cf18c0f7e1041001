pub mod alias_output;
