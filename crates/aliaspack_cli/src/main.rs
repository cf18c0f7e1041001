mod args;
mod types;

use std::{path::Path, process::ExitCode, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use args::{InputArgs, OutputArgs};
use clap::Parser;

use aliaspack::{AliasBuilder, AliasOptions, AliasTable};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn load_options(input: InputArgs) -> anyhow::Result<AliasOptions> {
  let mut options = match &input.config {
    Some(config) => {
      let content = std::fs::read_to_string(config)
        .with_context(|| format!("Failed to read config \"{}\"", config.display()))?;
      let options = serde_json::from_str::<AliasOptions>(&content)
        .with_context(|| format!("Invalid config \"{}\"", config.display()))?;
      // A bare file name sits in the process directory, which is already the default root.
      match config.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        Some(config_dir) => anchor_config_paths(options, config_dir),
        None => options,
      }
    }
    None => AliasOptions::default(),
  };

  // Flags take precedence over the config file.
  if input.cwd.is_some() {
    options.cwd = input.cwd;
  }
  if input.src.is_some() {
    options.src = input.src;
  }
  if let Some(mode) = input.mode {
    options.mode = Some(mode.into());
  }

  Ok(options)
}

/// A relative `cwd` in a config file is relative to the file, not to where the CLI runs.
/// Every other relative path in it already resolves against that `cwd`.
fn anchor_config_paths(mut options: AliasOptions, config_dir: &Path) -> AliasOptions {
  options.cwd = Some(match options.cwd {
    Some(cwd) if cwd.is_relative() => config_dir.join(cwd),
    Some(cwd) => cwd,
    None => config_dir.to_path_buf(),
  });
  options
}

fn print_alias_table(alias: &AliasTable, cwd: &Path) {
  let left = alias.keys().map(str::len).max().unwrap_or_default();

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (key, path) in alias.iter() {
    let target = path.strip_prefix(cwd).map_or_else(
      |_| path.display().to_string(),
      |relative| format!("<ROOT>/{}", relative.display()),
    );

    println!("{}{:pad$} {} {}", color.paint(key), "", dim.paint("→"), target, pad = left - key.len());
  }
}

fn main() -> ExitCode {
  let args = Commands::parse();

  let options = match load_options(args.input) {
    Ok(options) => options,
    Err(error) => {
      eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };

  let start = Instant::now();
  let builder = AliasBuilder::new(options);

  match builder.build() {
    Ok(output) => {
      if !args.output.silent {
        for warning in &output.warnings {
          eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }
      }

      if args.output.json {
        match output.to_json() {
          Ok(json) => println!("{json}"),
          Err(error) => {
            eprintln!("{} {}", Colour::Red.paint("Error:"), error);
            return ExitCode::FAILURE;
          }
        }
      } else {
        print_alias_table(output.alias(), &builder.options().cwd);

        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}

#[test]
fn test_anchor_config_paths() {
  let config_dir = Path::new("/work/configs");
  let anchor = |cwd: Option<&str>| {
    let options = AliasOptions { cwd: cwd.map(Into::into), ..Default::default() };
    anchor_config_paths(options, config_dir).cwd
  };

  assert_eq!(anchor(Some("../shop")), Some(config_dir.join("../shop")));
  assert_eq!(anchor(Some("/srv/shop")), Some("/srv/shop".into()));
  assert_eq!(anchor(None), Some(config_dir.to_path_buf()));
}
