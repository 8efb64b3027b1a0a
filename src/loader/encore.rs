//! Format support for Webpack Encore's `entrypoints.json`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoaderError;
use crate::loader::sanitize::{handle_from_file, sanitize_file_name};
use crate::loader::{ManifestEntry, ManifestFormat};

/// Deserialized layout of `entrypoints.json`.
#[derive(Debug, Default, Deserialize)]
struct EntrypointsFile {
  #[serde(default)]
  entrypoints: BTreeMap<String, EntrypointGroup>,
}

/// Files one entrypoint needs, grouped by asset flavor.
#[derive(Debug, Default, Deserialize)]
struct EntrypointGroup {
  #[serde(default)]
  js: Vec<String>,
  #[serde(default)]
  css: Vec<String>,
}

/// Format for `entrypoints.json` written by Webpack Encore.
///
/// ```json
/// {
///   "entrypoints": {
///     "app": {
///       "js": ["/build/runtime.js", "/build/app.1f9c3a72.js"],
///       "css": ["/build/app.css"]
///     }
///   }
/// }
/// ```
///
/// Shared chunks listed under several entrypoints are emitted once, at
/// their first occurrence. Handles come from each file's stem with any
/// content-hash segment removed, so the scripts above register as
/// `runtime` and `app`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncoreEntrypoints;

impl ManifestFormat for EncoreEntrypoints {
  fn parse_entries(
    &self,
    data: &Value,
    resource: &Path,
  ) -> Result<Vec<ManifestEntry>, LoaderError> {
    let document: EntrypointsFile =
      serde_json::from_value(data.clone()).map_err(|source| LoaderError::InvalidResource {
        path: resource.to_path_buf(),
        source,
      })?;

    let mut seen = BTreeSet::new();
    let mut entries = Vec::new();
    for group in document.entrypoints.into_values() {
      for file in group.js.into_iter().chain(group.css) {
        if !seen.insert(sanitize_file_name(&file)) {
          continue;
        }
        entries.push(ManifestEntry {
          handle: handle_from_file(&file),
          file,
        });
      }
    }

    Ok(entries)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn parse(data: Value) -> Result<Vec<ManifestEntry>, LoaderError> {
    EncoreEntrypoints.parse_entries(&data, Path::new("build/entrypoints.json"))
  }

  #[test]
  fn collects_scripts_and_styles_per_entrypoint() {
    let entries = parse(json!({
      "entrypoints": {
        "app": {
          "js": ["/build/runtime.js", "/build/app.1f9c3a72.js"],
          "css": ["/build/app.css"]
        }
      }
    }))
    .expect("entrypoints should parse");

    let handles: Vec<&str> = entries.iter().map(|e| e.handle.as_str()).collect();
    assert_eq!(handles, vec!["runtime", "app", "app"]);
    assert_eq!(entries[1].file, "/build/app.1f9c3a72.js");
  }

  #[test]
  fn shared_chunks_are_emitted_once() {
    let entries = parse(json!({
      "entrypoints": {
        "admin": { "js": ["/build/runtime.js", "/build/admin-backend.js"] },
        "app": { "js": ["/build/runtime.js", "/build/app.js"] }
      }
    }))
    .expect("entrypoints should parse");

    let files: Vec<&str> = entries.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(files, vec![
      "/build/runtime.js",
      "/build/admin-backend.js",
      "/build/app.js",
    ]);
  }

  #[test]
  fn entrypoints_without_styles_parse() {
    let entries = parse(json!({
      "entrypoints": { "app": { "js": ["/build/app.js"] } }
    }))
    .expect("entrypoints should parse");

    assert_eq!(entries.len(), 1);
  }

  #[test]
  fn empty_documents_yield_no_entries() {
    let entries = parse(json!({})).expect("an empty document is a valid manifest");
    assert!(entries.is_empty());
  }

  #[test]
  fn malformed_entrypoint_groups_are_invalid() {
    let result = parse(json!({ "entrypoints": { "app": ["not", "a", "group"] } }));
    assert!(matches!(result, Err(LoaderError::InvalidResource { .. })));
  }
}
