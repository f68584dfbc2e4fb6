//! Normalization of product image URLs
//!
//! The catalog stores images inconsistently. Observed shapes:
//!
//! - a bare URL: `https://i.imgur.com/a.jpeg` (kept as is)
//! - a stringified array: `["https://i.imgur.com/a.jpeg"]`, sometimes with
//!   escaped quotes `[\"https://...\"]` (brackets, quotes and backslashes stripped)
//! - junk before the scheme, e.g. `xx"http://...` (cut to the first `http`)
//! - empty or missing (placeholder)

/// Resolve a stored image value into something usable as `<img src>`
pub fn normalize_image_url(raw: Option<&str>, placeholder: &str) -> String {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return placeholder.to_string(),
    };

    let clean: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"' | '\\'))
        .collect();

    match clean.find("http") {
        Some(pos) => clean[pos..].to_string(),
        None => clean,
    }
}
