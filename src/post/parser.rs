//! Metadata header parsing.
//!
//! A document looks like:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-01 12:00:00
//! tags: ["rust", "web"]
//! category: tech
//! ---
//! markdown body
//! ```

use super::literal::parse_string_list;
use super::types::Post;
use crate::error::{ContentError, Result};

/// Line that opens and closes the header block.
const DELIMITER: &str = "---";

/// Separator between a header key and its value.
const SEPARATOR: &str = ": ";

/// Parse one raw document into a [`Post`].
///
/// `path_title` comes from the caller (the file name), never from the header.
/// The body after the second delimiter line is kept byte for byte.
pub fn parse_document(raw: &str, path_title: &str) -> Result<Post> {
    let (header, content) = split_document(raw)
        .ok_or_else(|| ContentError::malformed(path_title, "expected two `---` delimiter lines"))?;

    let mut post = Post {
        path_title: path_title.to_owned(),
        content: content.to_owned(),
        ..Default::default()
    };

    for line in header.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = parse_attribute(line)
            .map_err(|reason| ContentError::malformed(path_title, reason))?;
        apply_field(&mut post, key, value)
            .map_err(|reason| ContentError::malformed(path_title, reason))?;
    }

    Ok(post)
}

/// Split a header line on the first `": "`.
///
/// Everything after the first separator is the value, so `time: 12:30:45`
/// yields `("time", "12:30:45")`. Key and value are trimmed.
pub fn parse_attribute(line: &str) -> std::result::Result<(&str, &str), String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split_once(SEPARATOR)
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| format!("header line `{line}` has no `{SEPARATOR}` separator"))
}

/// Locate the header block and body.
///
/// Returns `None` when fewer than two delimiter lines exist. A leading byte
/// order mark is ignored.
fn split_document(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut offset = 0;
    let mut header_start = None;

    for line in raw.split_inclusive('\n') {
        let end = offset + line.len();
        if is_delimiter(line) {
            match header_start {
                None => header_start = Some(end),
                Some(start) => return Some((&raw[start..offset], &raw[end..])),
            }
        }
        offset = end;
    }

    None
}

#[inline]
fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

/// Store one decoded header field on the post.
fn apply_field(post: &mut Post, key: &str, value: &str) -> std::result::Result<(), String> {
    match key {
        "title" => post.title = value.to_owned(),
        "date" => post.date = value.to_owned(),
        "category" => post.category = value.to_owned(),
        "tags" => post.tags = parse_string_list(value)?,
        "enable_cosmo" => post.enable_cosmo = parse_flag(value)?,
        "thumbnail" => post.thumbnail = (!value.is_empty()).then(|| value.to_owned()),
        _ => {
            post.extra.insert(key.to_owned(), value.to_owned());
        }
    }
    Ok(())
}

fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected `true` or `false`, got `{value}`"))
    }
}
