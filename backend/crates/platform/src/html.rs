//! HTML Escaping
//!
//! Minimal escaping for server-rendered pages. Every user-influenced
//! value must pass through [`escape`] before interpolation into markup.

/// Escape the five HTML-significant characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
