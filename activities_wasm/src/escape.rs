/// Escape text for interpolation into an HTML fragment.
///
/// Ampersand is replaced first so the entities introduced by the later
/// replacements are not themselves re-escaped.
pub fn escape_html(value: &str) -> String {
  value
    .replace('&', "&amp;")
    .replace('"', "&quot;")
    .replace('\'', "&#39;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}
