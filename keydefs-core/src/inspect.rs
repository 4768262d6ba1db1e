//! # Definition File Inspection
//!
//! Reads back a generated header and reports which credentials were filled in
//! and which were left blank for runtime configuration. Values themselves are
//! never surfaced to callers beyond set/blank.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::service::{CredentialField, Service};

/// Errors that can occur while reading a definition file
#[derive(Debug, Error)]
pub enum InspectError {
  #[error("Failed to read {}", path.display())]
  Read { path: PathBuf, source: io::Error },
  #[error("Missing include guard: expected '#ifndef {0}' / '#define {0}' at the top of the file")]
  MissingGuard(String),
  #[error("Missing closing '#endif // {0}'")]
  MissingEndif(String),
  #[error("Line {line}: malformed definition '{text}'")]
  MalformedDefine { line: usize, text: String },
  #[error("Line {line}: duplicate definition of {name}")]
  DuplicateDefine { line: usize, name: String },
}

/// Macro definitions parsed from a header, keyed by macro name.
#[derive(Debug, Default)]
pub struct Definitions {
  values: HashMap<String, String>,
}

impl Definitions {
  /// Raw (unquoted) value of a macro, if defined.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.values.get(name).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Set/blank/missing status for every field of `service`.
  pub fn service_status(&self, service: &Service) -> ServiceStatus {
    let status = |field| match self.get(&service.macro_name(field)) {
      Some("") => FieldStatus::Blank,
      Some(_) => FieldStatus::Set,
      None => FieldStatus::Missing,
    };
    ServiceStatus {
      service: *service,
      key: status(CredentialField::Key),
      secret: status(CredentialField::Secret),
    }
  }
}

/// State of one credential field in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
  Set,
  Blank,
  Missing,
}

impl fmt::Display for FieldStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      FieldStatus::Set => "set",
      FieldStatus::Blank => "blank",
      FieldStatus::Missing => "missing",
    })
  }
}

/// Status of both fields for one service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatus {
  pub service: Service,
  pub key: FieldStatus,
  pub secret: FieldStatus,
}

impl ServiceStatus {
  pub fn is_complete(&self) -> bool {
    self.key == FieldStatus::Set && self.secret == FieldStatus::Set
  }
}

impl fmt::Display for ServiceStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: key {}, secret {}", self.service.name, self.key, self.secret)
  }
}

/// Read and parse the header at `path`.
pub fn read_definitions(path: &Path, guard: &str) -> Result<Definitions, InspectError> {
  let text = fs::read_to_string(path).map_err(|source| InspectError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  parse_definitions(&text, guard)
}

/// Parse header text produced by the emitter.
///
/// Values keep everything between the first and the last quote, so a value
/// with embedded quotes reads back as it was typed.
pub fn parse_definitions(text: &str, guard: &str) -> Result<Definitions, InspectError> {
  let ifndef = format!("#ifndef {guard}");
  let define_guard = format!("#define {guard}");
  let endif = format!("#endif // {guard}");

  let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

  let opening: Vec<&str> = lines.by_ref().take(2).map(|(_, line)| line.trim_end()).collect();
  if opening != [ifndef.as_str(), define_guard.as_str()] {
    return Err(InspectError::MissingGuard(guard.to_string()));
  }

  let mut definitions = Definitions::default();
  let mut closed = false;

  for (index, line) in lines {
    let line_no = index + 1;
    let line = line.trim_end();

    if closed {
      return Err(InspectError::MalformedDefine {
        line: line_no,
        text: line.to_string(),
      });
    }
    if line == endif {
      closed = true;
      continue;
    }

    let (name, value) = parse_define(line).ok_or_else(|| InspectError::MalformedDefine {
      line: line_no,
      text: line.to_string(),
    })?;
    if definitions.values.insert(name.to_string(), value.to_string()).is_some() {
      return Err(InspectError::DuplicateDefine {
        line: line_no,
        name: name.to_string(),
      });
    }
  }

  if !closed {
    return Err(InspectError::MissingEndif(guard.to_string()));
  }

  Ok(definitions)
}

/// Split `#define NAME "value"` into name and unquoted value.
fn parse_define(line: &str) -> Option<(&str, &str)> {
  let rest = line.strip_prefix("#define ")?;
  let (name, quoted) = rest.split_once(' ')?;
  if name.is_empty() || quoted.len() < 2 {
    return None;
  }
  let value = quoted.strip_prefix('"')?.strip_suffix('"')?;
  Some((name, value))
}
