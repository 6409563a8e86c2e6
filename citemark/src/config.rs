// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::Path;

use citemark_core::Options;

use crate::cli::Preset;

/// An options file, when given, wins over the preset.
pub fn load_options(path: Option<&Path>, preset: Preset) -> citemark_core::Result<Options> {
    match path {
        Some(path) => citemark_core::config::load_options_from_yaml_file(path),
        None => Ok(preset_options(preset)),
    }
}

pub fn preset_options(preset: Preset) -> Options {
    match preset {
        Preset::Mixed => Options::default(),
        Preset::DocumentOnly => Options::document_only(),
    }
}
