// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Citation markers embedded in generated text.
//!
//! A marker is `[kind:value]` or `[kind:value|metadata]`. The metadata after
//! `|` is accepted and discarded.

use std::borrow::Cow;
use std::collections::HashSet;

use regex::Regex;
use serde::Deserialize;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum CitationKind {
    /// A file under the configured documents directory.
    Document,
    /// An external web page.
    Site,
    /// A recognized marker token with no anchor builder.
    Other(String),
}

impl CitationKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            "document" | "doc" => Self::Document,
            "site" => Self::Site,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Document => "document",
            Self::Site => "site",
            Self::Other(token) => token,
        }
    }

    fn marker_tokens(&self) -> Vec<&str> {
        match self {
            Self::Document => vec!["document", "doc"],
            Self::Site => vec!["site"],
            Self::Other(token) => vec![token.as_str()],
        }
    }
}

impl From<String> for CitationKind {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    pub kind: CitationKind,
    pub value: String,
    /// Byte offset of the marker in the scanned text.
    pub position: usize,
    /// Byte length of the whole marker.
    pub len: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueCitation {
    pub kind: CitationKind,
    pub value: String,
}

impl UniqueCitation {
    fn key(&self) -> String {
        format!("{}:{}", self.kind.name(), self.value)
    }
}

/// Compiled marker pattern for a fixed set of kinds.
#[derive(Clone, Debug)]
pub struct CitationPattern {
    regex: Option<Regex>,
}

impl CitationPattern {
    pub fn new(kinds: &[CitationKind]) -> Result<Self> {
        let mut tokens = Vec::new();
        for kind in kinds {
            for token in kind.marker_tokens() {
                if !is_valid_marker_token(token) {
                    return Err(Error::InvalidMarkerToken(token.to_string()));
                }
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }

        if tokens.is_empty() {
            return Ok(Self { regex: None });
        }

        // Longest first so `document` is never shadowed by `doc`.
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternatives = tokens
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(r"\[({alternatives}):([^|\]]+)(?:\|[^\]]*)?\]"))?;
        Ok(Self { regex: Some(regex) })
    }

    /// Scans `text` left to right and returns every well-formed marker in
    /// order of appearance, duplicates included.
    pub fn extract(&self, text: &str) -> Vec<Citation> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        regex
            .captures_iter(text)
            .filter_map(|captures| {
                let whole = captures.get(0)?;
                let token = captures.get(1)?.as_str().trim();
                let value = captures.get(2)?.as_str().trim();
                if token.is_empty() || value.is_empty() {
                    return None;
                }
                Some(Citation {
                    kind: CitationKind::from_token(token),
                    value: value.to_string(),
                    position: whole.start(),
                    len: whole.len(),
                })
            })
            .collect()
    }

    /// Removes every marker from `text`, malformed ones included.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.regex {
            Some(regex) => regex.replace_all(text, ""),
            None => Cow::Borrowed(text),
        }
    }
}

/// Collapses repeated `(kind, value)` pairs, keeping first-seen order.
pub fn dedup(citations: &[Citation]) -> Vec<UniqueCitation> {
    let mut seen = HashSet::new();
    citations
        .iter()
        .map(|citation| UniqueCitation {
            kind: citation.kind.clone(),
            value: citation.value.clone(),
        })
        .filter(|citation| seen.insert(citation.key()))
        .collect()
}

fn is_valid_marker_token(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}
