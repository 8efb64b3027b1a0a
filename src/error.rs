//! Error types shared by every loader in the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while loading a manifest or its companion files.
///
/// Every failure is raised immediately to the caller of
/// [`ManifestLoader::load`](crate::ManifestLoader::load); there is no retry
/// and no partial result. The caller decides whether to abort an entire
/// build or skip the failing manifest.
#[derive(Debug, Error)]
pub enum LoaderError {
  /// The manifest or companion path does not resolve to a readable file.
  #[error("asset resource not found: {path}")]
  FileNotFound {
    /// Path that failed to resolve.
    path: PathBuf,
  },

  /// Reading an existing file failed for a reason other than absence.
  #[error("failed to read {path}: {source}")]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },

  /// The file exists but its content does not decode as the expected JSON.
  #[error("invalid asset resource {path}: {source}")]
  InvalidResource {
    /// Path that caused the error.
    path: PathBuf,
    /// Source decode error.
    source: serde_json::Error,
  },

  /// A manifest entry points at a file no descriptor kind exists for.
  #[error("unsupported asset extension '{extension}' in '{file}'")]
  UnsupportedExtension {
    /// Extension that failed to resolve; empty when the file has none.
    extension: String,
    /// Manifest file value the extension came from.
    file: String,
  },
}
