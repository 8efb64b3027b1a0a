//! Manifest loading orchestration and the format seam concrete parsers plug
//! into.

mod encore;
mod sanitize;
mod webpack;

pub use encore::EncoreEntrypoints;
pub use sanitize::{handle_from_file, sanitize_file_name};
pub use webpack::WebpackManifest;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::asset::{Asset, AssetKind};
use crate::dependencies::resolve_dependencies;
use crate::error::LoaderError;
use crate::location::resolve_location;
use crate::reader::read_manifest;

/// Uniform entry a manifest format produces from its own JSON shape.
///
/// Entries are transient: they exist only between parsing and descriptor
/// resolution within one [`ManifestLoader::load`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
  /// Handle the asset will register under.
  pub handle: String,
  /// File value as given by the manifest: a path or URL, possibly carrying
  /// a version query string.
  pub file: String,
}

/// Capability supplied by a concrete manifest format.
///
/// Implementations normalize their manifest-specific JSON shape into a flat
/// entry list; everything after that (kind, location, dependencies) is the
/// loader's job.
pub trait ManifestFormat {
  /// Normalize decoded manifest data into entries.
  ///
  /// `resource` is the path the data was read from, available for error
  /// reporting and for formats whose semantics depend on the manifest's
  /// directory.
  fn parse_entries(&self, data: &Value, resource: &Path)
    -> Result<Vec<ManifestEntry>, LoaderError>;
}

/// Loads a manifest file and resolves every entry into a registrable
/// [`Asset`].
///
/// The format is a constructor dependency, so a loader is built per
/// manifest flavor:
///
/// ```no_run
/// use webpack_assets::{ManifestLoader, WebpackManifest};
///
/// let loader = ManifestLoader::new(WebpackManifest);
/// let assets = loader.load("dist/manifest.json")?;
/// # Ok::<(), webpack_assets::LoaderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ManifestLoader<F> {
  format: F,
}

impl<F: ManifestFormat> ManifestLoader<F> {
  /// Create a loader for the provided manifest format.
  pub fn new(format: F) -> Self {
    Self { format }
  }

  /// Load a manifest file and resolve its asset descriptors.
  ///
  /// Reads and decodes the manifest, hands the raw value to the format, and
  /// resolves each returned entry. Resolution is all-or-nothing: the first
  /// failing entry fails the whole load.
  pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<Asset>, LoaderError> {
    let path = path.as_ref();
    let data = read_manifest(path)?;
    let entries = self.format.parse_entries(&data, path)?;

    entries
      .into_iter()
      .map(|entry| resolve_asset(entry, path))
      .collect()
  }
}

/// Resolve one manifest entry into an asset descriptor.
fn resolve_asset(entry: ManifestEntry, resource: &Path) -> Result<Asset, LoaderError> {
  let file = sanitize_file_name(&entry.file);
  let extension = Path::new(&file)
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or_default();

  let kind =
    AssetKind::from_extension(extension).ok_or_else(|| LoaderError::UnsupportedExtension {
      extension: extension.to_string(),
      file: file.clone(),
    })?;

  let location = resolve_location(&file);
  let file_path = sibling_path(resource, &file);
  let dependencies = resolve_dependencies(&file_path)?;

  Ok(Asset {
    handle: entry.handle,
    kind,
    dependencies,
    location,
    file: file_path,
  })
}

/// Resolve the on-disk path of a manifest file value.
///
/// Manifest values may be URLs or public paths with a build prefix; the
/// built file itself sits next to the manifest, so only the base name is
/// kept.
fn sibling_path(resource: &Path, file: &str) -> PathBuf {
  let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
  match resource.parent() {
    Some(dir) => dir.join(base),
    None => PathBuf::from(base),
  }
}
