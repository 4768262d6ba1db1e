//! Temporary working directory management for testing
//!
//! This module provides a throwaway directory laid out like a checkout of the
//! daemon sources, so tests never touch a real `daemon/keydefs.h`.

use std::fs;
use std::path::{Path, PathBuf};

use keydefs_core::{DEFAULT_OUTPUT, GeneratorConfig};
use tempfile::TempDir;

/// A temporary directory standing in for the invocation root
pub struct TempWorkspace {
  /// The temporary directory, removed on drop
  pub temp_dir: TempDir,
}

impl Default for TempWorkspace {
  fn default() -> Self {
    Self::new()
  }
}

impl TempWorkspace {
  /// Create an empty workspace with a `daemon/` directory
  pub fn new() -> Self {
    let workspace = Self::bare();
    fs::create_dir_all(workspace.path("daemon")).expect("Failed to create daemon directory");
    workspace
  }

  /// Create an empty workspace without any subdirectories
  pub fn bare() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    Self { temp_dir }
  }

  /// Root of the workspace
  pub fn root(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to a file in the workspace
  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.temp_dir.path().join(relative_path)
  }

  /// Where the header is generated by default
  pub fn header_path(&self) -> PathBuf {
    self.path(DEFAULT_OUTPUT)
  }

  /// Default generator configuration pointed at this workspace
  pub fn config(&self) -> GeneratorConfig {
    GeneratorConfig::with_output(self.header_path())
  }

  /// Put a file at the header path before the run
  pub fn seed_header(&self, content: &str) {
    fs::write(self.header_path(), content).expect("Failed to seed header");
  }

  /// Contents of the generated header, if any
  pub fn read_header(&self) -> Option<String> {
    fs::read_to_string(self.header_path()).ok()
  }
}
