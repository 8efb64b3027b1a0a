//! Reading and decoding JSON manifests from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::LoaderError;

/// Read a manifest file and decode its content as JSON.
///
/// The existence check runs before any read, so absent files fail with
/// [`LoaderError::FileNotFound`] rather than a generic I/O error. Content
/// that is not well-formed JSON fails with [`LoaderError::InvalidResource`]
/// carrying the decode error.
pub fn read_manifest(path: &Path) -> Result<Value, LoaderError> {
  if !path.is_file() {
    return Err(LoaderError::FileNotFound {
      path: path.to_path_buf(),
    });
  }

  let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  serde_json::from_str(&content).map_err(|source| LoaderError::InvalidResource {
    path: path.to_path_buf(),
    source,
  })
}
