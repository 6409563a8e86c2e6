// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

/// Attributes allowed on any tag on top of ammonia's defaults. Citation
/// anchors need `target`, `rel` and `data-local-path`; anchors and code
/// highlighting rely on `class`.
pub const EXTRA_ATTRIBUTES: &[&str] = &["target", "rel", "data-local-path", "class"];

/// Builds the HTML sanitizer.
///
/// `link_rel` is disabled because ammonia refuses to combine it with an
/// allowed `rel` attribute; links carry their own `rel` instead.
pub fn sanitizer() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .add_generic_attributes(EXTRA_ATTRIBUTES)
        .link_rel(None);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        sanitizer().clean(html).to_string()
    }

    // 行为：script 标签连同内容被移除，周围文本保留。
    #[test]
    fn strips_script() {
        let html = clean("<p>before</p><script>alert(1)</script><p>after</p>");
        assert_eq!(html, "<p>before</p><p>after</p>");
    }

    // 行为：允许列表中的属性得以保留。
    #[test]
    fn keeps_allow_listed_attributes() {
        let anchor = r##"<a href="#" class="rag-doc-link" data-local-path="/d/r.pdf">r.pdf</a>"##;
        assert_eq!(clean(anchor), anchor);

        let site = r#"<a href="https://x.org" class="rag-site-link" target="_blank" rel="noopener noreferrer">x.org</a>"#;
        assert_eq!(clean(site), site);
    }

    // 行为：事件处理属性与 javascript: 链接被去掉。
    #[test]
    fn drops_handlers_and_script_urls() {
        let html = clean(r#"<a href="javascript:alert(1)" onclick="x()">go</a>"#);
        assert!(!html.contains("javascript"), "{html}");
        assert!(!html.contains("onclick"), "{html}");
        assert!(html.contains(">go</a>"), "{html}");
    }

    // 行为：其他 data- 属性不在允许列表中。
    #[test]
    fn other_data_attributes_are_dropped() {
        let html = clean(r#"<span data-secret="1">x</span>"#);
        assert_eq!(html, "<span>x</span>");
    }
}
