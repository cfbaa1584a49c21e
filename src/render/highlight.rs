//! Syntax highlighting for fenced code blocks.
//!
//! Tokens are emitted as CSS-class spans (no inline colors), so the page
//! stylesheet decides the theme.

use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::escape::escape_html;
use crate::error::{ContentError, Result};

/// Bundled syntax definitions, loaded on first use.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Empty span that opens every highlighted fragment.
const LEADING_SPAN: &str = "<span></span>";

/// Highlight `code` as `lang`.
///
/// Output shape:
///
/// ```text
/// <div class="highlight">
///     <pre class="code" data-lang="python"><span></span><code>…tokens…</code></pre>
/// </div>
/// ```
pub fn highlight(code: &str, lang: &str) -> Result<String> {
    let lang = lang.trim();
    let syntax = SYNTAX_SET
        .find_syntax_by_token(lang)
        .ok_or_else(|| ContentError::UnsupportedLanguage(lang.to_owned()))?;

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);

    // Surrounding blank space is dropped, the last line still ends with '\n'
    let source = format!("{}\n", code.trim());
    for line in LinesWithEndings::from(&source) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|_| ContentError::UnsupportedLanguage(lang.to_owned()))?;
    }

    let mut tokens = format!("{LEADING_SPAN}{}", generator.finalize());
    // <code> sits right after the leading empty span
    tokens.insert_str(LEADING_SPAN.len(), "<code>");
    tokens.push_str("</code>");

    Ok(format!(
        "<div class=\"highlight\">\n    <pre class=\"code\" data-lang=\"{}\">{tokens}</pre>\n</div>",
        escape_html(lang)
    ))
}
