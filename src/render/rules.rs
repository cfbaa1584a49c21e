//! Built-in rendering rules for code blocks, headings and images.

use super::escape::{escape_html, escape_url};
use super::highlight::highlight;
use crate::error::Result;

/// Separator between caption and width in an image title.
const IMAGE_FIELD_SEPARATOR: &str = ";;";

/// Image width when the title does not give one.
const DEFAULT_IMAGE_WIDTH: u32 = 100;

/// Link icon placed after every heading.
const LINK_ICON: &str = concat!(
    r#"<svg class="anchor-icon" viewBox="0 0 16 16" width="14" height="14" aria-hidden="true">"#,
    r#"<path fill="currentColor" d="M7.775 3.275a.75.75 0 0 0 1.06 1.06l1.25-1.25a2 2 0 1 1 2.83 2.83l-2.5 2.5a2 2 0 0 1-2.83 0 .75.75 0 0 0-1.06 1.06 3.5 3.5 0 0 0 4.95 0l2.5-2.5a3.5 3.5 0 0 0-4.95-4.95l-1.25 1.25Zm-4.69 9.64a2 2 0 0 1 0-2.83l2.5-2.5a2 2 0 0 1 2.83 0 .75.75 0 0 0 1.06-1.06 3.5 3.5 0 0 0-4.95 0l-2.5 2.5a3.5 3.5 0 0 0 4.95 4.95l1.25-1.25a.75.75 0 0 0-1.06-1.06l-1.25 1.25a2 2 0 0 1-2.83 0Z"/>"#,
    "</svg>"
);

/// Code block: highlighted when a language is declared, escaped otherwise.
pub fn code_block(code: &str, lang: Option<&str>) -> Result<String> {
    match lang {
        Some(lang) => highlight(code, lang),
        None => Ok(format!("<pre><code>{}</code></pre>", escape_html(code))),
    }
}

/// Heading with an anchor id and a trailing link to itself.
pub fn heading(text: &str, level: u8) -> String {
    // Inline HTML leaves `"` unescaped, which would end the attribute
    let id = anchor_id(text).replace('"', "&quot;");
    format!(
        "<h{level} id=\"{id}\">{text}&nbsp;<a class=\"anchor\" href=\"#{id}\">{LINK_ICON}</a></h{level}>"
    )
}

/// Image with optional caption and percent width carried in `title`.
///
/// `title` is `caption;;width`, e.g. `"A cat;;50"`, `";;30"` or `"A cat"`.
pub fn image(alt: &str, url: &str, title: Option<&str>) -> String {
    let (caption, width) = parse_image_title(title);

    let mut html = format!(
        r#"<span class="image" style="display: block; text-align: center;"><img src="{}" alt="{}" style="width: {width}%;" />"#,
        escape_url(url),
        escape_html(alt),
    );
    if let Some(caption) = caption {
        html.push_str(&format!(
            r#"<br /><em class="text-gray">{}</em>"#,
            escape_html(caption)
        ));
    }
    html.push_str("</span>");
    html
}

/// Heading id: lowercase, spaces replaced with underscores.
///
/// Punctuation is kept as is.
pub fn anchor_id(text: &str) -> String {
    text.to_lowercase().replace(' ', "_")
}

/// Split an image title into caption and width.
///
/// Empty caption means none; a missing or non-numeric width falls back to 100.
fn parse_image_title(title: Option<&str>) -> (Option<&str>, u32) {
    let Some(title) = title else {
        return (None, DEFAULT_IMAGE_WIDTH);
    };

    let mut fields = title.splitn(2, IMAGE_FIELD_SEPARATOR);
    let caption = fields.next().map(str::trim).filter(|c| !c.is_empty());
    let width = fields
        .next()
        .and_then(|w| w.trim().parse().ok())
        .unwrap_or(DEFAULT_IMAGE_WIDTH);

    (caption, width)
}
