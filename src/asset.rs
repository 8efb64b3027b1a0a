//! Typed asset descriptors produced by the manifest loaders.

use std::path::PathBuf;

use serde::Serialize;

/// Descriptor kind an asset registers as, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
  /// JavaScript asset (`.js`).
  Script,
  /// Stylesheet asset (`.css`).
  Style,
}

impl AssetKind {
  /// Resolve the descriptor kind for a file extension.
  ///
  /// Only `js` and `css` map to kinds. Everything else is `None`, and the
  /// caller decides whether that means skipping the entry or failing the
  /// load.
  pub fn from_extension(extension: &str) -> Option<Self> {
    match extension {
      "js" => Some(Self::Script),
      "css" => Some(Self::Style),
      _ => None,
    }
  }
}

/// Application context an asset is scoped to when registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
  /// Public-facing pages. The default when no filename marker matches.
  #[default]
  Frontend,
  /// Administration screens.
  Backend,
  /// Login screen.
  Login,
  /// Theme customizer.
  Customizer,
  /// Block editor.
  BlockEditorAssets,
}

/// Registrable asset resolved from one manifest entry.
///
/// Descriptors are constructed fresh on every load and never mutated
/// afterwards. Handle uniqueness across manifests is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
  /// Handle the asset registers under.
  pub handle: String,
  /// Script or style classification.
  pub kind: AssetKind,
  /// Handles this asset depends on, in companion-file order.
  pub dependencies: Vec<String>,
  /// Application context the asset targets.
  pub location: Location,
  /// On-disk path of the built asset, sibling to the manifest.
  pub file: PathBuf,
}
