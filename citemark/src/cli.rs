// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render chat messages to sanitized HTML.
    Render(RenderArgs),
    /// Resolve a `data-local-path` value to a JSON file payload.
    ReadLocal(ReadLocalArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Message files; `-` reads standard input.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// YAML options file; replaces the preset entirely.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Preset::Mixed)]
    pub preset: Preset,

    /// Documents directory used to resolve document citations.
    #[arg(long, value_name = "DIR")]
    pub base_path: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Document and site citations, ` - ` separator, base path required.
    Mixed,
    /// Document citations only, ` · ` separator, labels without a base path.
    DocumentOnly,
}

#[derive(Args, Debug)]
pub struct ReadLocalArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Allowed root; searched upwards for `data/docs` when omitted.
    #[arg(long, value_name = "DIR")]
    pub docs_root: Option<PathBuf>,
}
