use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::models::{Entry, GitInfo, Session};

/// One decoded session file. Every field except `entries` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "working_directory")]
    pub cwd: Option<String>,
    #[serde(default)]
    pub git: Option<GitRecord>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitRecord {
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub commit_hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    #[serde(
        rename = "ts",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
}

/// Result of parsing a sessions directory: one [`Session`] per readable
/// session file plus a count of skipped files for diagnostics.
#[derive(Debug, Default)]
pub struct ParsedSessions {
    pub sessions: Vec<Session>,
    pub skipped: usize,
}

/// Parse every session file in a directory tree into [`Session`] objects.
///
/// Files are visited in a deterministic (name-sorted) order. Each `.json` or
/// `.jsonl` file is decoded as a single JSON document; files that fail to
/// decode are logged to stderr and skipped. A file with an empty entries list
/// still yields a Session (its start and end times are undefined).
pub fn parse_sessions_dir(dir: &Path) -> Result<ParsedSessions> {
    if !dir.is_dir() {
        bail!("Sessions directory does not exist: {}", dir.display());
    }

    let mut parsed = ParsedSessions::default();

    let walker = WalkDir::new(dir).sort_by_file_name();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read sessions directory: {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !has_session_extension(path) {
            continue;
        }

        match parse_session_file(path) {
            Ok(session) => parsed.sessions.push(session),
            Err(e) => {
                eprintln!("Warning: Failed to parse session file {}: {:#}", path.display(), e);
                parsed.skipped += 1;
            }
        }
    }

    // Sessions sorted by start time so project grouping sees them in
    // chronological order; ties broken by session id for determinism.
    parsed.sessions.sort_by(|a, b| {
        a.start_time().cmp(&b.start_time()).then_with(|| a.session_id.cmp(&b.session_id))
    });

    Ok(parsed)
}

fn has_session_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json") | Some("jsonl")
    )
}

fn parse_session_file(path: &Path) -> Result<Session> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;
    let record: SessionRecord =
        serde_json::from_str(&content).context("Failed to decode session file as JSON")?;

    // Fall back to the file stem when the document carries no id.
    let session_id = match record.id {
        Some(id) if !id.is_empty() => id,
        _ => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string()),
    };

    let mut entries: Vec<Entry> = record
        .entries
        .into_iter()
        .map(|e| Entry { session_id: session_id.clone(), timestamp: e.timestamp, text: e.text })
        .collect();
    entries.sort_by_key(|e| e.timestamp);

    let git = record.git.map(|g| GitInfo {
        repository_url: g.repository_url,
        branch: g.branch,
        commit_hash: g.commit_hash,
    });

    Ok(Session {
        session_id,
        entries,
        working_directory: record.cwd,
        git,
        instructions: record.instructions,
    })
}
