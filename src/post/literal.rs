//! Strict decoder for the `tags` header value.
//!
//! Accepts exactly a bracketed, comma-separated list of quoted strings:
//!
//! ```text
//! []
//! ["rust", "web"]
//! ['a', "b\"c",]
//! ```
//!
//! The value is scanned, never evaluated.

/// Decode a string list literal.
///
/// Returns a human-readable reason on failure; the caller wraps it into
/// `MalformedDocument`.
pub fn parse_string_list(value: &str) -> Result<Vec<String>, String> {
    let mut chars = value.trim().chars().peekable();

    if chars.next() != Some('[') {
        return Err(format!("tags must start with `[`, got `{value}`"));
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            Some(']') => break,
            Some(quote @ ('"' | '\'')) => {
                items.push(read_quoted(&mut chars, quote)?);
                skip_whitespace(&mut chars);
                match chars.next() {
                    Some(',') => continue,
                    Some(']') => break,
                    Some(c) => return Err(format!("expected `,` or `]` in tags, found `{c}`")),
                    None => return Err("unterminated tags list".into()),
                }
            }
            Some(c) => return Err(format!("tags may only contain quoted strings, found `{c}`")),
            None => return Err("unterminated tags list".into()),
        }
    }

    if chars.next().is_some() {
        return Err(format!("unexpected trailing input after tags list `{value}`"));
    }
    Ok(items)
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

/// Read a quoted string whose opening quote was already consumed.
fn read_quoted(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    quote: char,
) -> Result<String, String> {
    let mut out = String::new();
    loop {
        match chars.next() {
            Some('\\') => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(c @ ('\\' | '"' | '\'')) => out.push(c),
                Some(c) => return Err(format!("unsupported escape `\\{c}` in tags")),
                None => return Err("unterminated string in tags".into()),
            },
            Some(c) if c == quote => return Ok(out),
            Some(c) => out.push(c),
            None => return Err("unterminated string in tags".into()),
        }
    }
}
