mod preview;

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use svg_reveal_core::{Attributes, RevealingLabel};
use svg_reveal_protocol::{AttributeName, IntersectionEntry};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::preview::CaptureHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The shadow root's inner HTML
    Shadow,
    /// A standalone page using a declarative shadow root
    Html,
    /// The resolved configuration as JSON
    Config,
}

/// Render the svg-text-reveal widget for a set of attributes.
#[derive(Debug, Parser)]
#[command(name = "svg-reveal", version)]
struct Cli {
    /// Element attribute, e.g. `--attr text="Hello"`. Repeatable.
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
    attrs: Vec<(AttributeName, String)>,

    #[arg(long, value_enum, default_value_t = Format::Shadow)]
    format: Format,

    /// Render the text as it looks after scrolling into view. Without a
    /// script driving visibility, a static page never reveals otherwise.
    #[arg(long)]
    revealed: bool,
}

fn parse_attr(raw: &str) -> Result<(AttributeName, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    let name = name.trim().parse::<AttributeName>().map_err(|e| e.to_string())?;
    Ok((name, value.to_string()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(format = ?cli.format, revealed = cli.revealed, attrs = cli.attrs.len(), "rendering");
    let attributes: Attributes = cli.attrs.into_iter().collect();

    let mut widget = RevealingLabel::with_attributes(CaptureHost::default(), attributes);
    widget.mount().context("failed to render widget")?;
    if cli.revealed {
        widget
            .intersected(&[IntersectionEntry::visible(1.0)])
            .context("failed to reveal widget")?;
    }

    let output = match cli.format {
        Format::Shadow => widget.host().shadow_html().to_string(),
        Format::Html => preview::page(widget.config(), widget.host().shadow_html()),
        Format::Config => serde_json::to_string_pretty(widget.config())? + "\n",
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    stdout.flush()?;
    Ok(())
}
