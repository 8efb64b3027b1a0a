//! Filename-based classification of the application context an asset targets.

use crate::asset::Location;

/// Ordered marker table consulted while classifying a filename.
///
/// Order is part of the contract: the first marker found wins, so a name
/// carrying several markers follows the earliest rule listed here
/// (`style-backend-login.css` classifies as backend).
const LOCATION_MARKERS: &[(&str, Location)] = &[
    ("-backend", Location::Backend),
    ("-login", Location::Login),
    ("-customizer", Location::Customizer),
    ("-block", Location::BlockEditorAssets),
];

/// Classify a file name into the location its asset should register for.
///
/// Only the base name takes part in matching, so `./style.css` and
/// `style.css` classify identically. Names without a marker are frontend
/// assets.
pub fn resolve_location(file_name: &str) -> Location {
    let base = base_name(file_name);
    LOCATION_MARKERS
        .iter()
        .find(|(marker, _)| base.contains(marker))
        .map(|(_, location)| *location)
        .unwrap_or_default()
}

fn base_name(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or(file_name)
}
