// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,;:!?])").expect("valid regex"));
static SPACE_BEFORE_CLOSING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([)\]}])").expect("valid regex"));
static SPACE_AFTER_OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([(\[{])\s+").expect("valid regex"));
static HORIZONTAL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));
static SPACE_BEFORE_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));
static SPACE_AFTER_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]+").expect("valid regex"));

/// Tidies the gaps left behind after citation markers are removed.
///
/// Rules apply in order: no whitespace before `.,;:!?` or a closing
/// bracket, none after an opening bracket, horizontal runs collapse to one
/// space, lines lose leading and trailing spaces, and the result is
/// trimmed. `\s` in the first three rules spans newlines too.
pub fn normalize_punctuation(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = SPACE_BEFORE_PUNCTUATION.replace_all(text, "$1");
    let text = SPACE_BEFORE_CLOSING.replace_all(&text, "$1");
    let text = SPACE_AFTER_OPENING.replace_all(&text, "$1");
    let text = HORIZONTAL_RUN.replace_all(&text, " ");
    let text = SPACE_BEFORE_NEWLINE.replace_all(&text, "\n");
    let text = SPACE_AFTER_NEWLINE.replace_all(&text, "\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 行为：去掉标点前空白并折叠多余空格。
    #[test]
    fn collapses_spaces_and_punctuation() {
        assert_eq!(normalize_punctuation("Hello  world ,  done ."), "Hello world, done.");
    }

    // 行为：括号内侧的空白被去掉。
    #[test]
    fn tightens_brackets() {
        assert_eq!(normalize_punctuation("see ( this ) and [ that ]"), "see (this) and [that]");
        assert_eq!(normalize_punctuation("{ a }"), "{a}");
    }

    // 行为：行首行尾的空格与制表符被去掉，换行保留。
    #[test]
    fn trims_each_line() {
        assert_eq!(normalize_punctuation("  one \t\n\t two  \n"), "one\ntwo");
    }

    // 行为：标点前的换行也会被吞掉。
    #[test]
    fn newline_before_punctuation_is_removed() {
        assert_eq!(normalize_punctuation("end\n."), "end.");
    }

    // 行为：空输入原样返回。
    #[test]
    fn empty_input() {
        assert_eq!(normalize_punctuation(""), "");
    }
}
