// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use comrak::adapters::SyntaxHighlighterAdapter;
use comrak::html::{escape, write_opening_tag};
use once_cell::sync::Lazy;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Code fence highlighter emitting class-annotated spans.
///
/// The declared language wins when syntect knows it. Otherwise the syntax is
/// guessed from the first line (shebangs, modelines), falling back to plain
/// text.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntectClasses;

impl SyntaxHighlighterAdapter for SyntectClasses {
    fn write_highlighted(
        &self,
        output: &mut dyn fmt::Write,
        lang: Option<&str>,
        code: &str,
    ) -> fmt::Result {
        let language = lang.unwrap_or("");
        match highlight_with(code, resolve_syntax(code, language)) {
            Ok(html) => output.write_str(&html),
            Err(err) => {
                tracing::warn!(%err, language, "syntax highlighting failed, emitting plain code");
                escape(output, code)
            }
        }
    }

    fn write_pre_tag(
        &self,
        output: &mut dyn fmt::Write,
        attributes: HashMap<&'static str, Cow<'_, str>>,
    ) -> fmt::Result {
        write_opening_tag(output, "pre", attributes)
    }

    fn write_code_tag(
        &self,
        output: &mut dyn fmt::Write,
        attributes: HashMap<&'static str, Cow<'_, str>>,
    ) -> fmt::Result {
        write_opening_tag(output, "code", attributes)
    }
}

fn resolve_syntax(code: &str, language: &str) -> &'static SyntaxReference {
    let syntax_set: &'static SyntaxSet = &SYNTAX_SET;
    let declared = if language.is_empty() {
        None
    } else {
        syntax_set.find_syntax_by_token(language)
    };

    declared
        .or_else(|| {
            code.lines()
                .next()
                .and_then(|line| syntax_set.find_syntax_by_first_line(line))
        })
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text())
}

fn highlight_with(code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight(code: &str, language: &str) -> String {
        let mut html = String::new();
        SyntectClasses
            .write_highlighted(&mut html, Some(language), code)
            .unwrap();
        html
    }

    // 行为：声明的语言被识别时使用对应语法。
    #[test]
    fn declared_language() {
        let html = highlight("fn main() {}\n", "rust");
        assert!(html.contains("source rust"), "{html}");
    }

    // 行为：未声明语言时根据 shebang 自动识别。
    #[test]
    fn detects_from_first_line() {
        let html = highlight("#!/usr/bin/env python\nprint(1)\n", "");
        assert!(html.contains("source python"), "{html}");
    }

    // 行为：未知语言回退为纯文本，内容被转义。
    #[test]
    fn unknown_language_is_escaped_plain_text() {
        let html = highlight("<b>&</b>\n", "no-such-language");
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"), "{html}");
        assert!(!html.contains("<b>"));
    }

    // 行为：pre 与 code 标签带上 comrak 提供的属性。
    #[test]
    fn opening_tags_carry_attributes() {
        let mut html = String::new();
        SyntectClasses.write_pre_tag(&mut html, HashMap::new()).unwrap();
        SyntectClasses
            .write_code_tag(
                &mut html,
                HashMap::from([("class", Cow::Borrowed("language-rust"))]),
            )
            .unwrap();
        assert_eq!(html, "<pre><code class=\"language-rust\">");
    }
}
