// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::Path;

use serde::Deserialize;

use crate::citation::CitationKind;

/// Renderer configuration.
///
/// The default is the document + site variant. [`Options::document_only`]
/// is the single-kind variant, which joins sources with a middle dot and
/// processes citations even without a base path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Marker kinds recognized in message text. Kinds without an anchor
    /// builder are stripped from the body and never listed as sources.
    pub citation_kinds: Vec<CitationKind>,
    pub separator: String,
    pub sources_label: String,
    /// When set, citation processing is skipped entirely for calls that
    /// carry no base path, site citations included.
    pub require_base_path: bool,
    pub highlight_code: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            citation_kinds: vec![CitationKind::Document, CitationKind::Site],
            separator: " - ".to_string(),
            sources_label: "Sources:".to_string(),
            require_base_path: true,
            highlight_code: true,
        }
    }
}

impl Options {
    pub fn document_only() -> Self {
        Self {
            citation_kinds: vec![CitationKind::Document],
            separator: " · ".to_string(),
            require_base_path: false,
            ..Self::default()
        }
    }
}

pub fn load_options_from_yaml_file(path: &Path) -> crate::Result<Options> {
    let content = std::fs::read_to_string(path)?;
    let options = serde_yaml::from_str::<Options>(&content)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 行为：空 YAML 映射得到默认选项。
    #[test]
    fn empty_mapping_is_default() {
        let options = serde_yaml::from_str::<Options>("{}").unwrap();
        assert_eq!(options, Options::default());
    }

    // 行为：未知 token 作为 Other 类型保留，别名 doc 归一为 document。
    #[test]
    fn kinds_parse_from_tokens() {
        let options =
            serde_yaml::from_str::<Options>("citation_kinds: [doc, site, note]\n").unwrap();
        assert_eq!(
            options.citation_kinds,
            vec![
                CitationKind::Document,
                CitationKind::Site,
                CitationKind::Other("note".to_string()),
            ]
        );
    }

    // 行为：单类型预设只识别 document，且不要求 base path。
    #[test]
    fn document_only_preset() {
        let options = Options::document_only();
        assert_eq!(options.citation_kinds, vec![CitationKind::Document]);
        assert_eq!(options.separator, " · ");
        assert!(!options.require_base_path);
        assert_eq!(options.sources_label, "Sources:");
    }
}
