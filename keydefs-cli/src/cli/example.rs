//! # Example Command
//!
//! Prints the header template with every value blank.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use keydefs_core::emitter::render_definitions;
use keydefs_core::{CollectedCredentials, GUARD_TOKEN, SERVICES};

/// Handle the example command
pub(crate) fn handle_example_command() -> Result<ExitCode> {
  let template = render_definitions(GUARD_TOKEN, &CollectedCredentials::blank(&SERVICES));
  io::stdout()
    .lock()
    .write_all(template.as_bytes())
    .context("Failed to print the header template")?;
  Ok(ExitCode::SUCCESS)
}
