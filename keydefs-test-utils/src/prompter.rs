//! Scripted operator input for testing
//!
//! Stands in for the terminal so tests can drive a full generation run and
//! then inspect exactly which notes and prompts were shown.

use std::collections::VecDeque;
use std::io;

use keydefs_core::{PromptError, Prompter};

/// One scripted reaction to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
  /// Answer with this line
  Answer(String),
  /// Cancel the run at this prompt
  Abort,
}

/// A [`Prompter`] that replays a fixed script and records what it was asked.
///
/// Running out of script is treated like end of input and aborts.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
  script: VecDeque<Step>,
  /// Every prompt message, in order
  pub prompts: Vec<String>,
  /// Every note message, in order
  pub notes: Vec<String>,
}

impl ScriptedPrompter {
  /// Create a prompter from explicit steps
  pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
    Self {
      script: steps.into_iter().collect(),
      ..Self::default()
    }
  }

  /// Create a prompter that answers each prompt with the given lines
  pub fn answering<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
    Self::new(answers.into_iter().map(|answer| Step::Answer(answer.into())))
  }

  /// Create a prompter that answers `answered` prompts with blanks and then
  /// aborts
  pub fn aborting_after(answered: usize) -> Self {
    Self::new(
      std::iter::repeat_n(Step::Answer(String::new()), answered).chain(std::iter::once(Step::Abort)),
    )
  }

  /// Number of prompts shown so far
  pub fn prompt_count(&self) -> usize {
    self.prompts.len()
  }
}

impl Prompter for ScriptedPrompter {
  fn note(&mut self, message: &str) -> io::Result<()> {
    self.notes.push(message.to_string());
    Ok(())
  }

  fn prompt_line(&mut self, message: &str) -> Result<String, PromptError> {
    self.prompts.push(message.to_string());
    match self.script.pop_front() {
      Some(Step::Answer(answer)) => Ok(answer),
      Some(Step::Abort) | None => Err(PromptError::Aborted),
    }
  }
}
