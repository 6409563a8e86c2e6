// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

//! Resolution of `data-local-path` values produced by document citations.
//!
//! Reads are confined to the documents directory. Both the root and the
//! requested path are canonicalized before comparison, so neither `..` nor a
//! symlink can climb out of the root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::{Error, Result};

pub const DEFAULT_DOCS_MARKER: &str = "data/docs";
pub const DEFAULT_DISCOVERY_LEVELS: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsRoot {
    root: PathBuf,
}

impl DocsRoot {
    /// The root must exist.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = fs::canonicalize(root.as_ref())?;
        Ok(Self { root })
    }

    /// Looks for `marker` under `start` and up to `max_levels` of its
    /// ancestors, nearest first.
    pub fn discover(start: &Path, marker: &Path, max_levels: usize) -> Result<Self> {
        let mut current = normalize_path(&std::path::absolute(start)?);
        for _ in 0..=max_levels {
            let candidate = current.join(marker);
            if candidate.is_dir() {
                tracing::debug!(root = %candidate.display(), "found documents directory");
                return Self::new(candidate);
            }
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Err(Error::DocsRootNotFound {
            start: start.to_path_buf(),
            marker: marker.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// False for paths that do not exist.
    pub fn is_allowed(&self, path: &Path) -> bool {
        fs::canonicalize(path)
            .map(|resolved| resolved.starts_with(&self.root))
            .unwrap_or(false)
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Result<FilePayload> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }

        let resolved = fs::canonicalize(path)?;
        if !resolved.starts_with(&self.root) {
            return Err(Error::PathNotAllowed(resolved));
        }

        let metadata = fs::metadata(&resolved)?;
        if metadata.is_dir() {
            return Err(Error::NotAFile(resolved));
        }

        let bytes = fs::read(&resolved)?;
        let name = resolved
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = detect_mime(&resolved, &bytes);
        tracing::debug!(path = %resolved.display(), mime, size = bytes.len(), "read local file");

        Ok(FilePayload {
            name,
            mime: mime.to_string(),
            data_base64: STANDARD.encode(&bytes),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    pub name: String,
    pub mime: String,
    pub data_base64: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Open in a preview pane.
    Inline,
    /// Hand to a save-as flow.
    Attachment,
}

impl FilePayload {
    pub fn disposition(&self) -> Disposition {
        let mime = self.mime.as_str();
        let previewable = mime == "application/pdf"
            || mime == "application/json"
            || mime.starts_with("image/")
            || (mime.starts_with("text/") && mime != "text/html");
        if previewable {
            Disposition::Inline
        } else {
            Disposition::Attachment
        }
    }
}

fn detect_mime(path: &Path, bytes: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type();
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "txt" | "log" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
