//! Markdown links to posts.
//!
//! URL construction belongs to the hosting layer, so it is injected through
//! [`UrlBuilder`].

/// Maps a post identifier to its canonical URL path.
pub trait UrlBuilder {
    fn post_url(&self, path_title: &str) -> String;
}

/// `<prefix><path_title>/`, e.g. `/blog/post/hello/`.
#[derive(Debug, Clone)]
pub struct PrefixUrlBuilder {
    prefix: String,
}

impl PrefixUrlBuilder {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl UrlBuilder for PrefixUrlBuilder {
    fn post_url(&self, path_title: &str) -> String {
        format!("{}{path_title}/", self.prefix)
    }
}

impl<F: Fn(&str) -> String> UrlBuilder for F {
    fn post_url(&self, path_title: &str) -> String {
        self(path_title)
    }
}

/// One markdown list item linking to a post.
pub fn gen_post_md(path_title: &str, urls: &impl UrlBuilder) -> String {
    format!("- [{path_title}]({})", urls.post_url(path_title))
}

/// An intro line followed by a link item per post.
pub fn gen_post_list_md<S: AsRef<str>>(intro: &str, path_titles: &[S], urls: &impl UrlBuilder) -> String {
    std::iter::once(intro.to_owned())
        .chain(path_titles.iter().map(|pt| gen_post_md(pt.as_ref(), urls)))
        .collect::<Vec<_>>()
        .join("\n")
}
