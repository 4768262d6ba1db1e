//! # Existence Guard
//!
//! Refuses to regenerate a header that is already on disk. The check runs once,
//! before any prompt or write.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Result of the existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
  /// Nothing at the target path; safe to generate
  Proceed,
  /// A file already exists at the target path
  AlreadyExists,
}

/// Check whether anything already occupies `path`.
///
/// Symlinks are not followed, so a dangling link counts as existing. Errors
/// other than "not found" are returned rather than treated as absent. The
/// contents of an existing file are never read.
pub fn check_existing(path: &Path) -> io::Result<GuardOutcome> {
  let outcome = match fs::symlink_metadata(path) {
    Ok(_) => GuardOutcome::AlreadyExists,
    Err(err) if err.kind() == io::ErrorKind::NotFound => GuardOutcome::Proceed,
    Err(err) => return Err(err),
  };
  debug!(path = %path.display(), ?outcome, "Checked for existing definition file");
  Ok(outcome)
}
