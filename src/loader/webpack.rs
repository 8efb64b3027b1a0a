//! Format support for the flat map emitted by `webpack-manifest-plugin`.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::asset::AssetKind;
use crate::error::LoaderError;
use crate::loader::sanitize::{handle_from_file, sanitize_file_name};
use crate::loader::{ManifestEntry, ManifestFormat};

/// Format for `manifest.json` written by `webpack-manifest-plugin`.
///
/// The manifest is a flat object mapping source names to built files:
///
/// ```json
/// {
///   "app.js": "app.3e1f9d42.js",
///   "admin-backend.css": "admin-backend.css",
///   "logo.png": "logo.png"
/// }
/// ```
///
/// Rows whose built file is neither a script nor a stylesheet (source maps,
/// images, fonts) are not registrable assets and are skipped. Handles come
/// from the source name's stem, so the map above registers `app` and
/// `admin-backend`. Entries are emitted in sorted source-name order, which
/// keeps repeated loads deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpackManifest;

impl ManifestFormat for WebpackManifest {
  fn parse_entries(
    &self,
    data: &Value,
    resource: &Path,
  ) -> Result<Vec<ManifestEntry>, LoaderError> {
    let map: BTreeMap<String, String> =
      serde_json::from_value(data.clone()).map_err(|source| LoaderError::InvalidResource {
        path: resource.to_path_buf(),
        source,
      })?;

    let entries = map
      .into_iter()
      .filter_map(|(name, file)| {
        let sanitized = sanitize_file_name(&file);
        let extension = Path::new(&sanitized)
          .extension()
          .and_then(|ext| ext.to_str())
          .unwrap_or_default();
        AssetKind::from_extension(extension)?;

        Some(ManifestEntry {
          handle: handle_from_file(&name),
          file,
        })
      })
      .collect();

    Ok(entries)
  }
}
