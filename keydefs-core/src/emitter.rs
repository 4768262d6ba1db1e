//! # Definition File Emitter
//!
//! Renders the collected credentials as an include-guarded C header and writes
//! it to disk.
//!
//! The header is written to a temporary sibling first and then moved into
//! place without clobbering, so the target path holds either nothing or the
//! complete file.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::credentials::CollectedCredentials;
use crate::service::CredentialField;

/// Errors raised while persisting the header
#[derive(Debug, Error)]
pub enum EmitError {
  #[error("Failed to create a temporary file in {}", dir.display())]
  CreateTemp { dir: PathBuf, source: io::Error },
  #[error("Failed to write {}", path.display())]
  Write { path: PathBuf, source: io::Error },
  #[error("Failed to move the header into place at {}", path.display())]
  Persist { path: PathBuf, source: io::Error },
}

/// Render the header text.
///
/// Layout: `#ifndef`/`#define` guard, blank line, one `#define` per field in
/// catalog order, blank line, `#endif // <guard>` and a trailing newline.
pub fn render_definitions(guard: &str, credentials: &CollectedCredentials) -> String {
  let mut out = String::new();
  // Writing into a String cannot fail.
  let _ = writeln!(out, "#ifndef {guard}");
  let _ = writeln!(out, "#define {guard}");
  out.push('\n');

  for (service, pair) in credentials.iter() {
    for field in CredentialField::ALL {
      let _ = writeln!(out, "#define {} {}", service.macro_name(field), pair.get(field).as_str());
    }
  }

  out.push('\n');
  let _ = writeln!(out, "#endif // {guard}");
  out
}

/// Write `contents` to `path`, refusing to replace an existing file.
///
/// The parent directory must already exist.
pub fn write_definitions(path: &Path, contents: &str) -> Result<(), EmitError> {
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  };

  let mut temp = NamedTempFile::new_in(&dir).map_err(|source| EmitError::CreateTemp {
    dir: dir.clone(),
    source,
  })?;
  debug!(temp = %temp.path().display(), "Writing definitions to temporary file");

  temp
    .write_all(contents.as_bytes())
    .and_then(|()| temp.as_file().sync_all())
    .map_err(|source| EmitError::Write {
      path: path.to_path_buf(),
      source,
    })?;

  temp.persist_noclobber(path).map_err(|err| EmitError::Persist {
    path: path.to_path_buf(),
    source: err.error,
  })?;

  info!(path = %path.display(), bytes = contents.len(), "Wrote definition file");
  Ok(())
}
