//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tabkit_core::{ActivationMode, TabId};

use crate::config::Overrides;
use crate::replay::ReplayEvent;

#[derive(Parser, Debug)]
#[command(name = "tabkit")]
#[command(about = "Render and replay accessible tab widgets from TOML descriptions")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a tabs document to HTML
    Render(RenderArgs),
    /// Replay click, focus and key events against a tabs document
    Replay(ReplayArgs),
}

/// Arguments shared by every subcommand that reads a document.
#[derive(Args, Debug, Clone)]
pub struct DocArgs {
    /// Path to the TOML tabs document
    pub document: PathBuf,

    /// Override the activation mode (auto, manual)
    #[arg(long)]
    pub mode: Option<ActivationMode>,

    /// Override the initially active tab
    #[arg(long, value_name = "ID")]
    pub active: Option<String>,
}

impl DocArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            active: self.active.as_deref().map(TabId::from),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Write HTML to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit only the widget markup, without the surrounding page
    #[arg(long)]
    pub fragment: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Event to replay: click:ID, focus:ID or key:ID:KEY (repeatable)
    #[arg(short, long = "event", value_name = "EV", required = true)]
    pub events: Vec<ReplayEvent>,

    /// Print the widget fragment for the final selection after the transcript
    #[arg(long)]
    pub render: bool,
}
