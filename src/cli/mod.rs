//! Command-line interface for citerite.
//!
//! Provides commands for analyzing text once, running an interactive
//! session, and showing samples, the help guide and the configuration.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::warn;

use crate::config;
use crate::core::{root_claims, segment_document, summarize, AnalysisSummary, Segment};
use crate::domain::{ClaimId, DocumentResult};
use crate::render::{
    render_citation_panel, render_document, render_guide, render_summary, render_tree,
};
use crate::session::{Action, Session, SAMPLE_TEXTS};

pub mod session;

/// citerite - Claim and citation viewer
#[derive(Parser, Debug)]
#[command(name = "citerite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text once and print the results
    Scan {
        /// Input file (reads from stdin if piped)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Read input from stdin
        #[arg(long)]
        stdin: bool,

        /// Use a sample text (1-based, see `citerite samples`)
        #[arg(long, conflicts_with_all = ["input", "stdin"])]
        sample: Option<usize>,

        /// Which view to print
        #[arg(short, long, value_enum, default_value = "all")]
        view: ViewArg,

        /// Claim to show citations for
        #[arg(long)]
        select: Option<String>,

        /// Print the result as JSON instead of text views
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive session on stdin
    Session,

    /// List the sample texts
    Samples,

    /// Show how to use Cite Rite
    Guide,

    /// Show resolved configuration (debug)
    Config,
}

/// View selection for `scan`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Claim tree
    Tree,
    /// Highlighted document
    Document,
    /// Both views
    All,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Scan {
                input,
                stdin,
                sample,
                view,
                select,
                json,
            } => {
                let text = read_input(input, stdin, sample)?;
                scan(text, view, select, json).await
            }
            Commands::Session => session::run().await,
            Commands::Samples => list_samples(),
            Commands::Guide => {
                println!("{}", render_guide());
                Ok(())
            }
            Commands::Config => show_config(),
        }
    }
}

/// Resolve the text to analyze from a file, stdin or a sample
fn read_input(input_file: Option<PathBuf>, use_stdin: bool, sample: Option<usize>) -> Result<String> {
    if let Some(number) = sample {
        let index = number
            .checked_sub(1)
            .filter(|i| *i < SAMPLE_TEXTS.len())
            .with_context(|| {
                format!("Sample must be between 1 and {}", SAMPLE_TEXTS.len())
            })?;
        return Ok(SAMPLE_TEXTS[index].to_string());
    }

    if let Some(path) = input_file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    if use_stdin || !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    anyhow::bail!("No input provided. Use --input <file>, --sample <n> or pipe to stdin")
}

/// JSON output for `scan --json`
#[derive(Serialize)]
struct ScanOutput<'a> {
    summary: AnalysisSummary,
    root_claims: Vec<&'a ClaimId>,
    segments: Vec<Segment<'a>>,
    document: &'a DocumentResult,
}

/// Analyze text once and print the requested views
async fn scan(text: String, view: ViewArg, select: Option<String>, json: bool) -> Result<()> {
    let cfg = config::config()?;
    let mut session = Session::from_config(cfg);

    session.dispatch(Action::EditText(text));
    if let Err(e) = session.analyze().await {
        anyhow::bail!("{}", e.user_message());
    }

    if let Some(id) = select {
        let state = session.dispatch(Action::SelectClaim(ClaimId::new(id.as_str())));
        if state.selected.is_none() {
            warn!(claim = %id, "Unknown claim id, nothing selected");
        }
    }

    let state = session.state();
    let Some(analysis) = state.analysis.as_ref() else {
        anyhow::bail!("Analysis finished without a result");
    };
    let document = &analysis.document;
    let selected = state.selected.as_ref();

    if json {
        let output = ScanOutput {
            summary: summarize(document),
            root_claims: root_claims(&document.claims),
            segments: segment_document(&analysis.text, document),
            document,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize scan result")?
        );
        return Ok(());
    }

    println!("{}", render_summary(&summarize(document)));

    if matches!(view, ViewArg::Tree | ViewArg::All) {
        println!("\nClaims\n{}", render_tree(&document.claims, selected));
    }
    if matches!(view, ViewArg::Document | ViewArg::All) {
        let segments = segment_document(&analysis.text, document);
        println!("\nDocument\n{}", render_document(&segments, selected));
    }
    if selected.is_some() {
        println!("\n{}", render_citation_panel(document, selected));
    }

    Ok(())
}

/// List the sample texts
fn list_samples() -> Result<()> {
    for (i, text) in SAMPLE_TEXTS.iter().enumerate() {
        println!("{}. {}\n", i + 1, text);
    }
    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Service:");
    println!("  Mode:     {}", cfg.service.mode);
    println!("  Endpoint: {}", cfg.service.endpoint);
    println!("  Timeout:  {}s", cfg.service.timeout_seconds);
    println!();
    println!("Limits:");
    println!("  Max input size: {} bytes", cfg.max_input_bytes);

    Ok(())
}
