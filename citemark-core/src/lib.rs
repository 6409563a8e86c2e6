// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

pub mod anchor;
pub mod citation;
pub mod config;
pub mod error;
pub mod highlight;
pub mod html;
pub mod local_file;
pub mod normalize;
pub mod sanitize;

use std::borrow::Cow;

use once_cell::sync::Lazy;

pub use citation::{Citation, CitationKind, UniqueCitation};
pub use config::Options;
pub use error::{Error, Result};

static DEFAULT_RENDERER: Lazy<Renderer> = Lazy::new(|| {
    Renderer::new(Options::default()).expect("default options only use valid marker tokens")
});

/// Renders `text` with the default document + site configuration.
pub fn render(text: &str, base_path: Option<&str>) -> String {
    DEFAULT_RENDERER.render(text, base_path)
}

pub fn render_with_options(text: &str, base_path: Option<&str>, options: &Options) -> Result<String> {
    let renderer = Renderer::new(options.clone())?;
    Ok(renderer.render(text, base_path))
}

/// Chat messages only go through markdown when they contain markdown
/// punctuation.
pub fn looks_like_markdown(text: &str) -> bool {
    text.contains(['#', '_', '*', '`', '-'])
}

/// Citation-aware markdown renderer.
///
/// Built once from [`Options`] and reused; rendering never fails and holds
/// no state between calls.
pub struct Renderer {
    options: Options,
    pattern: citation::CitationPattern,
    sanitizer: ammonia::Builder<'static>,
}

impl Renderer {
    pub fn new(options: Options) -> Result<Self> {
        let pattern = citation::CitationPattern::new(&options.citation_kinds)?;
        Ok(Self {
            options,
            pattern,
            sanitizer: sanitize::sanitizer(),
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn render(&self, text: &str, base_path: Option<&str>) -> String {
        if text.is_empty() {
            return String::new();
        }

        let markdown = self.transform_citations(text, base_path);
        let html = html::markdown_to_html(&markdown, self.options.highlight_code);
        self.sanitize(&html)
    }

    pub fn render_message(&self, content: &str, base_path: Option<&str>) -> String {
        if looks_like_markdown(content) {
            return self.render(content, base_path);
        }

        let mut html = String::from("<p>");
        if let Err(err) = comrak::html::escape(&mut html, content) {
            tracing::warn!(%err, "escaping plain message failed");
        }
        html.push_str("</p>");
        html
    }

    pub fn sanitize(&self, html: &str) -> String {
        self.sanitizer.clean(html).to_string()
    }

    /// Moves citation markers out of the body into a trailing sources block.
    ///
    /// The text is returned untouched when it has no recognized markers, or
    /// when a base path is required but missing.
    pub fn transform_citations<'t>(&self, text: &'t str, base_path: Option<&str>) -> Cow<'t, str> {
        let base_path = base_path.filter(|path| !path.is_empty());
        if self.options.require_base_path && base_path.is_none() {
            tracing::debug!("no base path, citation markers left in place");
            return Cow::Borrowed(text);
        }

        let citations = self.pattern.extract(text);
        if citations.is_empty() {
            return Cow::Borrowed(text);
        }

        let unique = citation::dedup(&citations);
        let anchors = unique
            .iter()
            .map(|citation| anchor::build_anchor(citation, base_path))
            .filter(|anchor| !anchor.is_empty())
            .collect::<Vec<_>>();
        tracing::debug!(
            found = citations.len(),
            unique = unique.len(),
            anchors = anchors.len(),
            "extracted citations"
        );

        let body = normalize::normalize_punctuation(&self.pattern.strip(text));
        if anchors.is_empty() {
            return Cow::Owned(body);
        }

        Cow::Owned(format!(
            "{body}\n\n**{}** {}",
            self.options.sources_label,
            anchors.join(&self.options.separator)
        ))
    }
}
