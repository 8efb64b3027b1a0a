//! Filename hygiene shared by the concrete manifest formats.

use regex::Regex;

fn query_suffix() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[?#].*$").expect("invalid query suffix regex"))
}

fn content_hash_suffix() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.[0-9a-f]{8,}$").expect("invalid content hash regex"))
}

/// Strip a query string or fragment appended to a manifest file value.
///
/// Webpack setups frequently version assets as `app.js?v=abc123`; kind and
/// location resolution work on the plain file name.
pub fn sanitize_file_name(value: &str) -> String {
    query_suffix().replace(value, "").into_owned()
}

/// Derive a registration handle from a manifest file value.
///
/// Takes the base name, drops the extension, and removes a trailing
/// content-hash segment, so `build/app.3e1f9d42.js` and `app.js` both
/// produce the handle `app`.
pub fn handle_from_file(value: &str) -> String {
    let sanitized = sanitize_file_name(value);
    let base = sanitized.rsplit(['/', '\\']).next().unwrap_or(&sanitized);
    let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem);
    content_hash_suffix().replace(stem, "").into_owned()
}
