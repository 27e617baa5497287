//! Sanitising of free-form device input before it is stored.

/// Escape the characters that are significant in HTML markup.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Trim and escape an optional field; absent fields become the empty string.
#[must_use]
pub fn clean_field(raw: Option<&str>) -> String {
    raw.map(|s| escape_html(s.trim())).unwrap_or_default()
}
