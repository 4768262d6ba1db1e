//! # Generation Run
//!
//! Guard, collect, emit. Each phase runs once and in that order; nothing is
//! written unless every prompt was answered.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::collector::collect_credentials;
use crate::config::GeneratorConfig;
use crate::emitter::{EmitError, render_definitions, write_definitions};
use crate::guard::{GuardOutcome, check_existing};
use crate::prompts::{PromptError, Prompter};

/// How a run ended without a hard failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
  /// The header was written to this path
  Written(PathBuf),
  /// A file was already present; nothing was prompted or written
  AlreadyExists(PathBuf),
  /// The operator cancelled during the prompts; nothing was written
  Aborted,
}

/// Failures that end a run
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("Failed to check for an existing header at {}", path.display())]
  Guard { path: PathBuf, source: io::Error },
  #[error("Failed to talk to the operator")]
  Prompt(#[from] PromptError),
  #[error(transparent)]
  Emit(#[from] EmitError),
}

/// Notes shown before the first prompt.
pub fn intro_notes(config: &GeneratorConfig) -> Vec<String> {
  vec![
    "If you don't want to hardcode these values, leave them blank and use \
     'setkeyandsecret <key> <secret>' in the bot upon startup."
      .to_string(),
    format!(
      "To fill in the header by hand instead, press CTRL-C, save the output of 'keydefs example' to {} \
       and paste your keys in there.",
      config.output.display()
    ),
    format!("Generating {}...", config.file_name()),
  ]
}

/// Run the guard, the prompts and the emitter against `config`.
pub fn generate(config: &GeneratorConfig, prompter: &mut dyn Prompter) -> Result<GenerateOutcome, GenerateError> {
  let guard = check_existing(&config.output).map_err(|source| GenerateError::Guard {
    path: config.output.clone(),
    source,
  })?;
  if guard == GuardOutcome::AlreadyExists {
    warn!(path = %config.output.display(), "Definition file already exists, not generating");
    return Ok(GenerateOutcome::AlreadyExists(config.output.clone()));
  }

  for note in intro_notes(config) {
    prompter.note(&note).map_err(PromptError::from)?;
  }

  let credentials = match collect_credentials(&config.services, prompter) {
    Ok(credentials) => credentials,
    Err(PromptError::Aborted) => {
      info!("Operator aborted, nothing written");
      return Ok(GenerateOutcome::Aborted);
    }
    Err(err) => return Err(err.into()),
  };

  let contents = render_definitions(&config.guard, &credentials);
  write_definitions(&config.output, &contents)?;

  Ok(GenerateOutcome::Written(config.output.clone()))
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::io::Cursor;

  use tempfile::TempDir;

  use super::*;
  use crate::prompts::LinePrompter;

  #[test]
  fn test_intro_notes_mention_runtime_command_and_file() {
    let config = GeneratorConfig::default();
    let notes = intro_notes(&config);
    assert_eq!(notes.len(), 3);
    assert!(notes[0].contains("setkeyandsecret <key> <secret>"));
    assert!(notes[1].contains("daemon/keydefs.h"));
    assert_eq!(notes[2], "Generating keydefs.h...");
  }

  #[test]
  fn test_generate_writes_all_blank_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig::with_output(temp_dir.path().join("keydefs.h"));
    let mut prompter = LinePrompter::new(Cursor::new("\n".repeat(6).into_bytes()), Vec::new());

    let outcome = generate(&config, &mut prompter).expect("Generation failed");

    assert_eq!(outcome, GenerateOutcome::Written(config.output.clone()));
    let header = fs::read_to_string(&config.output).expect("Failed to read header");
    assert_eq!(header.matches(" \"\"\n").count(), 6);
  }

  #[cfg(unix)]
  #[test]
  fn test_dangling_symlink_is_not_prompted_over() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig::with_output(temp_dir.path().join("keydefs.h"));
    std::os::unix::fs::symlink(temp_dir.path().join("missing-target"), &config.output)
      .expect("Failed to create symlink");
    let mut prompter = LinePrompter::new(Cursor::new("k1\n".repeat(6).into_bytes()), Vec::new());

    let outcome = generate(&config, &mut prompter).expect("Generation failed");

    assert_eq!(outcome, GenerateOutcome::AlreadyExists(config.output.clone()));
    assert!(prompter.into_writer().is_empty(), "nothing should be shown");
  }

  #[cfg(unix)]
  #[test]
  fn test_guard_lookup_failure_is_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("daemon");
    fs::write(&blocker, "").expect("Failed to write file");
    let config = GeneratorConfig::with_output(blocker.join("keydefs.h"));
    let mut prompter = LinePrompter::new(Cursor::new(Vec::new()), Vec::new());

    let err = generate(&config, &mut prompter).expect_err("Guard should fail");

    assert!(matches!(err, GenerateError::Guard { .. }));
    assert!(prompter.into_writer().is_empty());
  }

  #[test]
  fn test_error_messages_do_not_repeat_their_cause() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig::with_output(temp_dir.path().join("missing").join("keydefs.h"));
    let mut prompter = LinePrompter::new(Cursor::new("\n".repeat(6).into_bytes()), Vec::new());

    let err = generate(&config, &mut prompter).expect_err("Missing directory should fail");

    let mut messages = Vec::new();
    let mut current: Option<&dyn std::error::Error> = Some(&err);
    while let Some(error) = current {
      messages.push(error.to_string());
      current = error.source();
    }
    let cause = messages.last().expect("Error chain is empty").clone();
    assert!(messages.len() >= 2);
    assert_eq!(messages.iter().filter(|message| message.contains(&cause)).count(), 1);
  }

  struct BrokenWriter;

  impl io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn test_unwritable_terminal_keeps_prompt_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig::with_output(temp_dir.path().join("keydefs.h"));
    let mut prompter = LinePrompter::new(Cursor::new("\n".repeat(6).into_bytes()), BrokenWriter);

    let err = generate(&config, &mut prompter).expect_err("Broken terminal should fail");

    assert!(matches!(err, GenerateError::Prompt(PromptError::Io(_))));
    assert!(!config.output.exists());
  }

  #[test]
  fn test_generate_io_failure_is_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = GeneratorConfig::with_output(temp_dir.path().join("missing").join("keydefs.h"));
    let mut prompter = LinePrompter::new(Cursor::new("\n".repeat(6).into_bytes()), Vec::new());

    let err = generate(&config, &mut prompter).expect_err("Missing directory should fail");

    assert!(matches!(err, GenerateError::Emit(_)));
    assert!(!config.output.exists());
  }
}
