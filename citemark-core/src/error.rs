// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid options file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid citation marker token `{0}`")]
    InvalidMarkerToken(String),

    #[error("failed to build citation pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("empty local path")]
    EmptyPath,

    #[error("access to `{}` is outside the documents directory", .0.display())]
    PathNotAllowed(PathBuf),

    #[error("`{}` is a directory, not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("no `{}` directory found above `{}`", .marker.display(), .start.display())]
    DocsRootNotFound { start: PathBuf, marker: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
