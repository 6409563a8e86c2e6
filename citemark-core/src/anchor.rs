// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use url::Url;

use crate::citation::{CitationKind, UniqueCitation};

/// Builds the HTML anchor listed in the sources block for one citation.
///
/// Kinds without an anchor builder yield an empty string.
pub fn build_anchor(citation: &UniqueCitation, base_path: Option<&str>) -> String {
    let anchor = match &citation.kind {
        CitationKind::Document => document_anchor(&citation.value, base_path),
        CitationKind::Site => site_anchor(&citation.value),
        CitationKind::Other(_) => String::new(),
    };
    tracing::trace!(kind = citation.kind.name(), value = %citation.value, %anchor, "built citation anchor");
    anchor
}

pub fn document_anchor(filename: &str, base_path: Option<&str>) -> String {
    let Some(base_path) = base_path.filter(|path| !path.is_empty()) else {
        return format!(r#"<span class="rag-local-label">{filename}</span>"#);
    };

    let full_path = join_local_path(base_path, filename);
    format!(
        r##"<a href="#" class="rag-doc-link" data-local-path="{}">{filename}</a>"##,
        escape_attr(&full_path)
    )
}

pub fn site_anchor(url: &str) -> String {
    let label = site_label(url);
    format!(
        r#"<a href="{}" class="rag-site-link" target="_blank" rel="noopener noreferrer">{label}</a>"#,
        escape_attr(url)
    )
}

/// Joins with `\` for Windows-style bases and `/` otherwise. The base is
/// used verbatim; no separator deduplication.
pub fn join_local_path(base_path: &str, filename: &str) -> String {
    if is_windows_path(base_path) {
        format!("{base_path}\\{filename}")
    } else {
        format!("{base_path}/{filename}")
    }
}

fn is_windows_path(path: &str) -> bool {
    path.contains('\\') || has_drive_prefix(path)
}

fn has_drive_prefix(path: &str) -> bool {
    matches!(
        path.as_bytes(),
        [letter, b':', b'\\', ..] if letter.is_ascii_alphabetic()
    )
}

/// Readable label for a site citation: the URL host, retried with an
/// `https://` prefix when the value has no scheme, else the raw value.
pub fn site_label(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let parsed = Url::parse(raw).or_else(|_| Url::parse(&format!("https://{raw}")));
    match parsed {
        Ok(url) => host_with_port(&url).unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|host| !host.is_empty())?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

pub fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
