//! # tabkit
//!
//! Command-line front end for the tabkit widget: loads a TOML tabs document,
//! renders it with [`tabkit_leptos`], or replays scripted input through the
//! [`tabkit_core`] state machine.
//!
//! ```text
//! tabkit render settings.toml -o settings.html
//! tabkit replay settings.toml --mode manual -e focus:password -e key:password:Enter
//! ```

pub mod cli;
pub mod config;
pub mod replay;

use std::io::Write;

use anyhow::{Context, Result};
use tabkit_leptos::{render_document, render_tabs};
use tracing::info;

use cli::{Cli, Command, RenderArgs, ReplayArgs};
use replay::Replayer;

/// Run a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Render(args) => render(args, out),
        Command::Replay(args) => replay(args, out),
    }
}

fn render(args: &RenderArgs, out: &mut impl Write) -> Result<()> {
    let document = config::load_document(&args.doc.document)?;
    let document = config::apply_overrides(document, &args.doc.overrides());

    let html = if args.fragment {
        render_tabs(&document)
    } else {
        render_document(&document)
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote tabs HTML");
        }
        None => writeln!(out, "{html}").context("failed to write HTML")?,
    }
    Ok(())
}

fn replay(args: &ReplayArgs, out: &mut impl Write) -> Result<()> {
    let document = config::load_document(&args.doc.document)?;
    let mut document = config::apply_overrides(document, &args.doc.overrides());

    let mut replayer = Replayer::new(&document);
    for event in &args.events {
        let step = replayer.apply(event)?;
        let line = serde_json::to_string(&step).context("failed to encode replay step")?;
        writeln!(out, "{line}").context("failed to write replay step")?;
    }

    if args.render {
        document.default_value = replayer.active();
        writeln!(out, "{}", render_tabs(&document)).context("failed to write HTML")?;
    }
    Ok(())
}
