//! HTML and URL escaping for rendered fragments.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes that may not appear raw inside an `src`/`href` value.
///
/// `%` is left alone so already-encoded URLs are not encoded twice.
const URL_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'\\')
    .add(b'^')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escape text for element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode unsafe bytes, then escape `&` for use in an attribute.
pub fn escape_url(url: &str) -> String {
    utf8_percent_encode(url, URL_UNSAFE)
        .to_string()
        .replace('&', "&amp;")
}
