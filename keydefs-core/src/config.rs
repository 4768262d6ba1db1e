//! # Generator Configuration
//!
//! Where the header goes, which guard token it uses and which services it
//! covers. Everything defaults to the values the daemon build expects.

use std::path::{Path, PathBuf};

use crate::service::{SERVICES, Service};

/// Default artifact location, relative to the invocation directory
pub const DEFAULT_OUTPUT: &str = "daemon/keydefs.h";

/// Include guard token of the generated header
pub const GUARD_TOKEN: &str = "KEYDEFS_H";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
  /// Path of the header to create
  pub output: PathBuf,
  /// Include guard token
  pub guard: String,
  /// Services to prompt for, in emission order
  pub services: Vec<Service>,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      output: PathBuf::from(DEFAULT_OUTPUT),
      guard: GUARD_TOKEN.to_string(),
      services: SERVICES.to_vec(),
    }
  }
}

impl GeneratorConfig {
  /// Default configuration writing to a different path.
  pub fn with_output(output: impl Into<PathBuf>) -> Self {
    Self {
      output: output.into(),
      ..Self::default()
    }
  }

  /// File name of the output, for operator messages.
  pub fn file_name(&self) -> String {
    display_name(&self.output)
  }
}

fn display_name(path: &Path) -> String {
  path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| path.display().to_string())
}
