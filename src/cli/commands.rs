use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::grouper::{group_history, group_projects};
use crate::parsers::{parse_history_file, parse_sessions_dir};
use crate::render::{Renderer, conversation_view, projects_view, write_report};

#[derive(Parser)]
#[command(name = "codex-log")]
#[command(version)]
#[command(about = "Convert Codex history logs into static HTML reports", long_about = None)]
pub struct Cli {
    /// Path to a history.jsonl file or a sessions directory
    pub input: PathBuf,

    /// Path for the generated HTML file
    pub output: PathBuf,

    /// Parse session files for project grouping (implied by a directory input)
    #[arg(long)]
    pub sessions: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.sessions || cli.input.is_dir() {
        let sessions_dir =
            if cli.input.is_dir() { cli.input.clone() } else { default_sessions_dir()? };
        convert_sessions(&sessions_dir, &cli.output)
    } else {
        convert_history(&cli.input, &cli.output)
    }
}

/// Fallback when --sessions is passed with a non-directory input.
fn default_sessions_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".codex").join("sessions"))
}

/// Convert a flat history.jsonl file to an HTML conversation report.
fn convert_history(input: &Path, output: &Path) -> Result<()> {
    println!("Parsing Codex log: {}", input.display());
    let parsed = parse_history_file(input)?;
    if parsed.skipped > 0 {
        eprintln!("Skipped {} malformed lines", parsed.skipped);
    }

    let conversation = group_history(parsed.records);
    if conversation.sessions.is_empty() {
        bail!("Input was readable but contained no usable entries: {}", input.display());
    }
    println!(
        "Found {} sessions with {} total entries",
        conversation.session_count(),
        conversation.total_entries()
    );

    let view = conversation_view(&conversation);
    let renderer = Renderer::new()?;
    let html = renderer.render_conversation(&view)?;

    println!("Rendering HTML: {}", output.display());
    write_report(&html, output)?;
    println!("HTML report generated: {}", output.display());
    Ok(())
}

/// Convert a directory of session files to an HTML project report.
fn convert_sessions(sessions_dir: &Path, output: &Path) -> Result<()> {
    println!("Parsing Codex sessions from: {}", sessions_dir.display());
    let parsed = parse_sessions_dir(sessions_dir)?;
    if parsed.skipped > 0 {
        eprintln!("Skipped {} malformed session files", parsed.skipped);
    }

    if parsed.sessions.is_empty() {
        bail!(
            "Input was readable but contained no usable session files: {}",
            sessions_dir.display()
        );
    }

    let total_entries: usize = parsed.sessions.iter().map(|s| s.entry_count()).sum();
    println!("Found {} sessions with {} total entries", parsed.sessions.len(), total_entries);

    let projects = group_projects(parsed.sessions);
    println!("Organized into {} projects", projects.len());

    let view = projects_view(&projects);
    let renderer = Renderer::new()?;
    let html = renderer.render_projects(&view)?;

    println!("Rendering HTML: {}", output.display());
    write_report(&html, output)?;
    println!("HTML report generated: {}", output.display());
    Ok(())
}
