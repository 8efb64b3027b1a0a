//! Companion dependency files resolved alongside built assets.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoaderError;

/// Extension the companion file carries in place of the asset's own.
const DEPS_EXTENSION: &str = "deps.json";

/// Resolve the ordered dependency handles declared next to an asset file.
///
/// The companion path replaces the asset's extension with `deps.json`
/// (`script.js` → `script.deps.json`). A missing companion is the common
/// case and yields an empty list. A companion that exists but does not
/// decode as a JSON array of strings is an invalid resource, same as the
/// primary manifest; array order is preserved verbatim.
pub fn resolve_dependencies(asset_path: &Path) -> Result<Vec<String>, LoaderError> {
  let companion = asset_path.with_extension(DEPS_EXTENSION);

  let content = match fs::read_to_string(&companion) {
    Ok(content) => content,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
    Err(source) => {
      return Err(LoaderError::Io {
        path: companion,
        source,
      });
    }
  };

  serde_json::from_str(&content).map_err(|source| LoaderError::InvalidResource {
    path: companion,
    source,
  })
}
