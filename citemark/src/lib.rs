// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

pub mod cli;
pub mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use clap::CommandFactory;
use citemark_core::Renderer;
use citemark_core::local_file::{
    DEFAULT_DISCOVERY_LEVELS, DEFAULT_DOCS_MARKER, Disposition, DocsRoot, FilePayload,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command, ReadLocalArgs, RenderArgs};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Render(args)) => run_render(&args),
        Some(Command::ReadLocal(args)) => run_read_local(&args),
        None => {
            CliArgs::command().print_help()?;
            Ok(())
        }
    }
}

fn run_render(args: &RenderArgs) -> anyhow::Result<()> {
    if args.inputs.is_empty() {
        bail!("没有输入文件");
    }

    let options = config::load_options(args.config.as_deref(), args.preset)
        .context("failed to load options")?;
    let renderer = Renderer::new(options)?;

    let mut html = String::new();
    for input in &args.inputs {
        let text = read_input(input)?;
        tracing::debug!(input = %input.display(), bytes = text.len(), "rendering message");
        html.push_str(&renderer.render(&text, args.base_path.as_deref()));
    }

    match &args.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write `{}`", path.display()))?,
        None => io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    fs::read_to_string(input).with_context(|| format!("failed to read `{}`", input.display()))
}

#[derive(Serialize)]
struct LocalFileReport {
    #[serde(flatten)]
    payload: FilePayload,
    disposition: Disposition,
}

fn run_read_local(args: &ReadLocalArgs) -> anyhow::Result<()> {
    let root = match &args.docs_root {
        Some(dir) => DocsRoot::new(dir)?,
        None => DocsRoot::discover(
            &std::env::current_dir()?,
            Path::new(DEFAULT_DOCS_MARKER),
            DEFAULT_DISCOVERY_LEVELS,
        )?,
    };

    let payload = root.read(&args.path).inspect_err(|err| {
        tracing::warn!(path = %args.path.display(), %err, "local file request rejected");
    })?;
    let report = LocalFileReport {
        disposition: payload.disposition(),
        payload,
    };

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;
    Ok(())
}
