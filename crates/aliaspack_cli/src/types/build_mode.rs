use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BuildMode {
  #[value(alias = "dev")]
  Development,
  #[value(alias = "prod")]
  Production,
}

impl From<BuildMode> for aliaspack::BuildMode {
  fn from(value: BuildMode) -> Self {
    match value {
      BuildMode::Development => aliaspack::BuildMode::Development,
      BuildMode::Production => aliaspack::BuildMode::Production,
    }
  }
}
