//! Markdown to HTML rendering.
//!
//! pulldown-cmark parses the document into an event stream. Code blocks,
//! headings and images are intercepted and handed to the matching entry of a
//! [`RenderRules`] table; their output re-enters the stream as raw HTML. All
//! other events go to pulldown-cmark's own HTML writer unchanged, raw HTML
//! blocks included.
//!
//! # Example
//!
//! ```
//! use folio::render::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::default().render("## Hello World").unwrap();
//! assert!(html.contains(r#"<h2 id="hello_world">"#));
//! ```

mod escape;
mod highlight;
pub mod rules;

pub use escape::{escape_html, escape_url};
pub use highlight::highlight;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use crate::{
    error::{ContentError, Result},
    log,
};

/// Renders a code block given its text and declared language.
pub type CodeBlockRule = fn(code: &str, lang: Option<&str>) -> Result<String>;

/// Renders a heading given its inner HTML and level (1-6).
pub type HeadingRule = fn(text: &str, level: u8) -> String;

/// Renders an image given alt text, URL and optional title.
pub type ImageRule = fn(alt: &str, url: &str, title: Option<&str>) -> String;

/// Per-node-kind rendering strategies.
#[derive(Debug, Clone, Copy)]
pub struct RenderRules {
    pub code_block: CodeBlockRule,
    pub heading: HeadingRule,
    pub image: ImageRule,
}

impl Default for RenderRules {
    fn default() -> Self {
        Self {
            code_block: rules::code_block,
            heading: rules::heading,
            image: rules::image,
        }
    }
}

/// Markdown extensions and failure policy.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    /// `$inline$` and `$$display$$` math
    pub math: bool,
    /// Fail on an unknown code block language instead of rendering it plain
    pub strict_languages: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            math: true,
            strict_languages: true,
        }
    }
}

impl MarkdownOptions {
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        opts.set(Options::ENABLE_TABLES, self.tables);
        opts.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        opts.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        opts.set(Options::ENABLE_TASKLISTS, self.tasklists);
        opts.set(Options::ENABLE_MATH, self.math);
        opts
    }
}

/// Markdown renderer with pluggable rules.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
    rules: RenderRules,
}

impl MarkdownRenderer {
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            options,
            rules: RenderRules::default(),
        }
    }

    /// Replace the rule table.
    pub fn with_rules(mut self, rules: RenderRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Convert a markdown document to an HTML fragment.
    ///
    /// Fails only with `UnsupportedLanguage`, and only when
    /// `strict_languages` is set.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let mut converter = Converter::new(self);
        for event in Parser::new_ext(markdown, self.options.to_pulldown_options()) {
            converter.push(event)?;
        }

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, converter.finish().into_iter());
        Ok(out)
    }

    /// Apply the code block rule, degrading to plain code when not strict.
    fn code_block(&self, code: &str, lang: Option<&str>) -> Result<String> {
        match (self.rules.code_block)(code, lang) {
            Err(ContentError::UnsupportedLanguage(name)) if !self.options.strict_languages => {
                log!("warn"; "no highlighting for `{name}`, rendering plain code");
                (self.rules.code_block)(code, None)
            }
            result => result,
        }
    }
}

/// Code block text collected between its start and end events.
struct PendingCode {
    lang: Option<String>,
    code: String,
}

/// Image collected between its start and end events.
struct PendingImage<'a> {
    url: CowStr<'a>,
    title: CowStr<'a>,
    alt: String,
    /// Images nested inside the alt text
    depth: usize,
}

/// Event stream rewriter driving the rule table.
struct Converter<'r, 'a> {
    renderer: &'r MarkdownRenderer,
    out: Vec<Event<'a>>,
    /// Open heading: level and inner events
    heading: Option<(u8, Vec<Event<'a>>)>,
    image: Option<PendingImage<'a>>,
    code: Option<PendingCode>,
}

impl<'r, 'a> Converter<'r, 'a> {
    fn new(renderer: &'r MarkdownRenderer) -> Self {
        Self {
            renderer,
            out: Vec::new(),
            heading: None,
            image: None,
            code: None,
        }
    }

    fn push(&mut self, event: Event<'a>) -> Result<()> {
        if let Some(pending) = self.code.take() {
            return self.push_code(pending, event);
        }
        if let Some(pending) = self.image.take() {
            self.push_image(pending, event);
            return Ok(());
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                self.code = Some(PendingCode {
                    lang: code_lang(&kind),
                    code: String::new(),
                });
            }
            Event::Start(Tag::Image { dest_url, title, .. }) => {
                self.image = Some(PendingImage {
                    url: dest_url,
                    title,
                    alt: String::new(),
                    depth: 0,
                });
            }
            Event::Start(Tag::Heading { level, .. }) => {
                self.heading = Some((heading_level(level), Vec::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, inner)) = self.heading.take() {
                    let mut text = String::new();
                    html::push_html(&mut text, inner.into_iter());
                    let html = (self.renderer.rules.heading)(&text, level);
                    self.emit_block(html);
                }
            }
            event => self.emit(event),
        }
        Ok(())
    }

    fn push_code(&mut self, mut pending: PendingCode, event: Event<'a>) -> Result<()> {
        match event {
            Event::End(TagEnd::CodeBlock) => {
                let html = self
                    .renderer
                    .code_block(&pending.code, pending.lang.as_deref())?;
                self.emit_block(html);
            }
            Event::Text(text) => {
                pending.code.push_str(&text);
                self.code = Some(pending);
            }
            _ => self.code = Some(pending),
        }
        Ok(())
    }

    fn push_image(&mut self, mut pending: PendingImage<'a>, event: Event<'a>) {
        match event {
            Event::End(TagEnd::Image) if pending.depth == 0 => {
                let title = Some(&*pending.title).filter(|t| !t.is_empty());
                let html = (self.renderer.rules.image)(&pending.alt, &pending.url, title);
                self.emit(Event::InlineHtml(CowStr::from(html)));
                return;
            }
            Event::End(TagEnd::Image) => pending.depth -= 1,
            Event::Start(Tag::Image { .. }) => pending.depth += 1,
            Event::Text(text) | Event::Code(text) => pending.alt.push_str(&text),
            Event::SoftBreak | Event::HardBreak => pending.alt.push(' '),
            _ => {}
        }
        self.image = Some(pending);
    }

    /// Block-level replacement, newline-terminated like pulldown's own blocks.
    fn emit_block(&mut self, mut html: String) {
        html.push('\n');
        self.emit(Event::Html(CowStr::from(html)));
    }

    fn emit(&mut self, event: Event<'a>) {
        match self.heading.as_mut() {
            Some((_, inner)) => inner.push(event),
            None => self.out.push(event),
        }
    }

    fn finish(self) -> Vec<Event<'a>> {
        self.out
    }
}

/// First word of a fenced block's info string; indented blocks have none.
fn code_lang(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_owned),
        CodeBlockKind::Indented => None,
    }
}

const fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> String {
        MarkdownRenderer::default().render(md).unwrap()
    }

    #[test]
    fn test_fenced_code_with_language() {
        let html = render("```python\nprint(\"x\")\n```\n");
        assert!(html.contains(r#"data-lang="python""#));
        assert!(html.contains("<code>"));
        assert!(html.contains(r#"<div class="highlight">"#));
    }

    #[test]
    fn test_fenced_code_without_language() {
        let html = render("```\nprint(\"x\")\n```\n");
        assert!(html.contains("<pre><code>print(&quot;x&quot;)\n</code></pre>"));
        assert!(!html.contains("highlight"));
        assert!(!html.contains("data-lang"));
    }

    #[test]
    fn test_info_string_first_word() {
        let html = render("```rust ignore\nfn main() {}\n```\n");
        assert!(html.contains(r#"data-lang="rust""#));
    }

    #[test]
    fn test_indented_code_is_plain() {
        let html = render("para\n\n    let x = 1 < 2;\n");
        assert!(html.contains("<pre><code>let x = 1 &lt; 2;\n</code></pre>"));
    }

    #[test]
    fn test_unknown_language_strict() {
        let err = MarkdownRenderer::default()
            .render("```nosuchlang\nx\n```\n")
            .unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedLanguage(ref l) if l == "nosuchlang"));
    }

    #[test]
    fn test_unknown_language_lenient() {
        let renderer = MarkdownRenderer::new(MarkdownOptions {
            strict_languages: false,
            ..Default::default()
        });
        let html = renderer.render("```nosuchlang\na < b\n```\n").unwrap();
        assert!(html.contains("<pre><code>a &lt; b\n</code></pre>"));
    }

    #[test]
    fn test_heading() {
        let html = render("## Test Heading\n\ntext\n");
        assert!(html.contains(r#"<h2 id="test_heading">Test Heading&nbsp;"#));
        assert!(html.contains(r##"href="#test_heading""##));
        assert!(html.contains("<p>text</p>"));
    }

    #[test]
    fn test_heading_with_quotes() {
        let html = render("## Say \"hi\" & <b>bye</b>\n");
        assert!(html.contains(r#"<h2 id="say_&quot;hi&quot;_&amp;_<b>bye</b>">"#));
        assert!(html.contains(r##"href="#say_&quot;hi&quot;_&amp;_<b>bye</b>""##));
        assert!(!html.contains(r#"id="say_"hi"#));
    }

    #[test]
    fn test_heading_with_inline_markup() {
        let html = render("# Hello *World*\n");
        assert!(html.contains("<h1 id=\"hello_<em>world</em>\">Hello <em>World</em>&nbsp;"));
    }

    #[test]
    fn test_image_in_paragraph() {
        let html = render("![alt text](image.jpg \"Caption;;50\")\n");
        assert!(html.contains(r#"src="image.jpg""#));
        assert!(html.contains(r#"alt="alt text""#));
        assert!(html.contains("width: 50%"));
        assert!(html.contains(r#"class="text-gray">Caption</em>"#));
    }

    #[test]
    fn test_image_without_title() {
        let html = render("![alt *text*](image.jpg)\n");
        assert!(html.contains(r#"alt="alt text""#));
        assert!(html.contains("width: 100%"));
        assert!(!html.contains("text-gray"));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let html = render("<div class=\"note\">\n<b>raw</b>\n</div>\n\ninline <kbd>K</kbd>\n");
        assert!(html.contains("<div class=\"note\">\n<b>raw</b>\n</div>"));
        assert!(html.contains("<kbd>K</kbd>"));
    }

    #[test]
    fn test_extensions() {
        let html = render("~~gone~~ and a note[^1]\n\n[^1]: the note\n\n$$x^2$$\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("footnote"));
        assert!(html.contains("math"));
    }

    #[test]
    fn test_custom_rules() {
        fn shout(text: &str, level: u8) -> String {
            format!("<h{level}>{}</h{level}>", text.to_uppercase())
        }
        let renderer = MarkdownRenderer::default().with_rules(RenderRules {
            heading: shout,
            ..Default::default()
        });
        assert!(renderer.render("### quiet\n").unwrap().contains("<h3>QUIET</h3>"));
    }

    #[test]
    fn test_plain_markdown_never_fails() {
        let md = "# Title\n\n- a\n- b\n\n> quote\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n- [x] done\n";
        let html = render(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("checkbox"));
    }
}
