#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset;
pub mod dependencies;
pub mod error;
pub mod loader;
pub mod location;
pub mod reader;

pub use asset::{Asset, AssetKind, Location};
pub use error::LoaderError;
pub use loader::{
  EncoreEntrypoints, ManifestEntry, ManifestFormat, ManifestLoader, WebpackManifest,
};
