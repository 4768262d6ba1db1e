//! # Check Command
//!
//! Reports which credentials an existing header defines, without printing
//! any of the values.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use keydefs_core::inspect::read_definitions;
use keydefs_core::output::{format_command, format_path};
use keydefs_core::{DEFAULT_OUTPUT, GUARD_TOKEN, SERVICES, print_error, print_info, print_success, print_warning};

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
  /// Path of the header to inspect
  #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
  pub output: PathBuf,
}

/// Handle the check command
///
/// A missing header is reported and exits non-zero; an unreadable or
/// malformed one is an error.
pub(crate) fn handle_check_command(args: CheckArgs) -> Result<ExitCode> {
  if !args.output.exists() {
    print_error(&format!(
      "No header found at {}.",
      format_path(&args.output.display().to_string())
    ));
    println!("Run {} to create it.", format_command("keydefs generate"));
    return Ok(ExitCode::FAILURE);
  }

  let definitions = read_definitions(&args.output, GUARD_TOKEN)
    .with_context(|| format!("Failed to check {}", args.output.display()))?;

  let mut incomplete = false;
  for service in &SERVICES {
    let status = definitions.service_status(service);
    if status.is_complete() {
      print_success(&status.to_string());
    } else {
      incomplete = true;
      print_warning(&status.to_string());
    }
  }

  if incomplete {
    print_info("Blank credentials can be supplied when the bot starts with 'setkeyandsecret <key> <secret>'.");
  }

  Ok(ExitCode::SUCCESS)
}
