//! # Prompts Module
//!
//! The line-prompt abstraction used by the credential collector, plus a
//! raw-key terminal implementation styled with the dialoguer theme and a
//! plain line reader for piped input.

use std::io::{self, BufRead, Write};

use console::{Key, Style, Term};
use dialoguer::theme::{ColorfulTheme, Theme};
use thiserror::Error;

use crate::output::print_info;

/// Errors raised while asking the operator for input
#[derive(Debug, Error)]
pub enum PromptError {
  /// The operator cancelled the run (Ctrl-C or end of input)
  #[error("Aborted by operator")]
  Aborted,
  #[error("Failed to read operator input")]
  Io(#[from] io::Error),
}

/// Source of operator answers.
pub trait Prompter {
  /// Show an informational line before prompting.
  fn note(&mut self, message: &str) -> io::Result<()>;

  /// Ask for one line of input. An empty answer is valid.
  fn prompt_line(&mut self, message: &str) -> Result<String, PromptError>;
}

/// Returns a custom dialoguer theme matching keydefs' color palette.
///
/// Features:
/// - Cyan bold prompt text
/// - Green `❯` prefix on active item
/// - Green highlight on active item text
pub fn keydefs_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}

/// Prompts on an interactive terminal.
///
/// Keys are read raw so Ctrl-C arrives as a key press and ends the run as
/// [`PromptError::Aborted`] instead of killing the process. Input is echoed,
/// secrets included.
pub struct TerminalPrompter {
  term: Term,
  theme: ColorfulTheme,
}

impl Default for TerminalPrompter {
  fn default() -> Self {
    Self::new()
  }
}

impl TerminalPrompter {
  pub fn new() -> Self {
    Self {
      term: Term::stdout(),
      theme: keydefs_theme(),
    }
  }
}

impl Prompter for TerminalPrompter {
  fn note(&mut self, message: &str) -> io::Result<()> {
    print_info(message);
    Ok(())
  }

  fn prompt_line(&mut self, message: &str) -> Result<String, PromptError> {
    let mut prompt = String::new();
    self
      .theme
      .format_input_prompt(&mut prompt, message, None)
      .map_err(io::Error::other)?;
    self.term.write_str(&prompt)?;

    let mut line = String::new();
    loop {
      let key = self.term.read_key_raw().map_err(interrupted_to_abort)?;
      match edit_line(&mut line, key) {
        KeyAction::Echo(c) => self.term.write_str(c.encode_utf8(&mut [0; 4]))?,
        KeyAction::Erase => self.term.clear_chars(1)?,
        KeyAction::Ignore => {}
        KeyAction::Submit => {
          self.term.write_line("")?;
          return Ok(line);
        }
        KeyAction::Abort => {
          self.term.write_line("")?;
          return Err(PromptError::Aborted);
        }
      }
    }
  }
}

/// What a key press does to the line being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
  Echo(char),
  Erase,
  Ignore,
  Submit,
  Abort,
}

/// Apply one key press to `line`.
///
/// Ctrl-C always aborts; Ctrl-D aborts only on an empty line, like end of
/// input on a pipe.
fn edit_line(line: &mut String, key: Key) -> KeyAction {
  match key {
    Key::Enter => KeyAction::Submit,
    Key::CtrlC => KeyAction::Abort,
    Key::Char('\u{4}') if line.is_empty() => KeyAction::Abort,
    Key::Char(c) if !c.is_control() => {
      line.push(c);
      KeyAction::Echo(c)
    }
    Key::Backspace if line.pop().is_some() => KeyAction::Erase,
    _ => KeyAction::Ignore,
  }
}

/// Prompts over any reader/writer pair, one line per answer.
///
/// End of input counts as an abort, so a truncated script never produces a
/// header.
pub struct LinePrompter<R, W> {
  reader: R,
  writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
  pub const fn new(reader: R, writer: W) -> Self {
    Self { reader, writer }
  }

  /// Recover the writer, e.g. to inspect what was shown.
  pub fn into_writer(self) -> W {
    self.writer
  }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
  fn note(&mut self, message: &str) -> io::Result<()> {
    writeln!(self.writer, "{message}")?;
    self.writer.flush()
  }

  fn prompt_line(&mut self, message: &str) -> Result<String, PromptError> {
    write!(self.writer, "{message}: ")?;
    self.writer.flush()?;

    let mut line = String::new();
    let read = self.reader.read_line(&mut line).map_err(interrupted_to_abort)?;
    if read == 0 {
      return Err(PromptError::Aborted);
    }

    Ok(strip_line_ending(line))
  }
}

fn interrupted_to_abort(err: io::Error) -> PromptError {
  if err.kind() == io::ErrorKind::Interrupted {
    PromptError::Aborted
  } else {
    PromptError::Io(err)
  }
}

/// Remove exactly one trailing line terminator and nothing else.
fn strip_line_ending(mut line: String) -> String {
  if line.ends_with('\n') {
    line.pop();
    if line.ends_with('\r') {
      line.pop();
    }
  }
  line
}
