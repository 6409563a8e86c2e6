// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Markdown to HTML with comrak's formatter.
//!
//! Raw HTML is passed through untouched; the caller is expected to run the
//! result through the sanitizer.

use std::fmt::Write;

use comrak::create_formatter;
use comrak::nodes::NodeValue;
use comrak::options::Plugins;

use crate::highlight::SyntectClasses;

// Every link leaving the page opens in a new tab without an opener
// reference. In-page `#fragment` links stay as they are.
create_formatter!(HardenedLinks, {
    NodeValue::Link(ref link) => |context, entering| {
        if entering {
            context.write_str("<a href=\"")?;
            context.escape_href(&link.url)?;
            if !link.title.is_empty() {
                context.write_str("\" title=\"")?;
                context.escape(&link.title)?;
            }
            context.write_str("\"")?;
            if !link.url.starts_with('#') {
                context.write_str(" target=\"_blank\" rel=\"noopener noreferrer\"")?;
            }
            context.write_str(">")?;
        } else {
            context.write_str("</a>")?;
        }
    },
});

pub fn markdown_to_html(markdown: &str, highlight: bool) -> String {
    let arena = comrak::Arena::new();
    let options = comrak_options();
    let root = comrak::parse_document(&arena, markdown, &options);

    let mut plugins = Plugins::default();
    if highlight {
        plugins.render.codefence_syntax_highlighter = Some(&SyntectClasses);
    }

    let mut out = String::new();
    if let Err(err) = HardenedLinks::format_document_with_plugins(root, &options, &mut out, &plugins) {
        tracing::warn!(%err, "html formatting stopped early");
    }
    out
}

fn comrak_options() -> comrak::Options<'static> {
    let mut options = comrak::Options::default();
    options.extension.autolink = true;
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.render.r#unsafe = true;
    options
}
