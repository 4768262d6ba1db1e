//! # Generate Command
//!
//! Runs the interactive header generation against the real terminal, or
//! against piped stdin when there is no terminal.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use keydefs_core::output::{format_command, format_path};
use keydefs_core::{
  DEFAULT_OUTPUT, GenerateOutcome, GeneratorConfig, LinePrompter, TerminalPrompter, generate, print_info, print_success,
  print_warning,
};
use tracing::debug;

use super::EXIT_ABORTED;

/// Arguments for the generate command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
  /// Path of the header to create
  #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
  pub output: PathBuf,
}

impl Default for GenerateArgs {
  fn default() -> Self {
    Self {
      output: PathBuf::from(DEFAULT_OUTPUT),
    }
  }
}

impl GenerateArgs {
  pub fn config(&self) -> GeneratorConfig {
    GeneratorConfig::with_output(&self.output)
  }
}

/// Handle the generate command
pub(crate) fn handle_generate_command(args: GenerateArgs) -> Result<ExitCode> {
  let config = args.config();

  let result = if io::stdin().is_terminal() {
    debug!("Prompting on the terminal");
    generate(&config, &mut TerminalPrompter::new())
  } else {
    debug!("Stdin is not a terminal, reading answers line by line");
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    generate(&config, &mut prompter)
  };
  let outcome = result.with_context(|| format!("Failed to generate {}", config.output.display()))?;

  match outcome {
    GenerateOutcome::Written(path) => {
      print_success(&format!("Wrote {}", format_path(&path.display().to_string())));
      print_info(&format!(
        "Run {} to see which credentials were left blank.",
        format_command("keydefs check")
      ));
      Ok(ExitCode::SUCCESS)
    }
    GenerateOutcome::AlreadyExists(_) => {
      print_warning(&format!(
        "{} already exists, exiting.. (if you meant to overwrite it, remove/move the file and re-run this command.)",
        config.file_name()
      ));
      Ok(ExitCode::SUCCESS)
    }
    GenerateOutcome::Aborted => {
      println!();
      print_info("Aborted, nothing was written.");
      Ok(ExitCode::from(EXIT_ABORTED))
    }
  }
}
