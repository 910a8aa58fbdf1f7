//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Format one history.jsonl line.
pub fn history_line(session_id: &str, ts: i64, text: &str) -> String {
    format!(r#"{{"session_id":"{}","ts":{},"text":"{}"}}"#, session_id, ts, text)
}

/// Builder for a temporary input layout (history file and/or sessions dir).
pub struct InputDirBuilder {
    temp_dir: TempDir,
}

impl InputDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a history.jsonl file with the given lines and return its path.
    pub fn with_history(&self, lines: &[String]) -> PathBuf {
        let path = self.temp_dir.path().join("history.jsonl");
        fs::write(&path, lines.join("\n")).expect("Failed to write history.jsonl");
        path
    }

    /// Create a sessions directory and return its path.
    pub fn sessions_dir(&self) -> PathBuf {
        let dir = self.temp_dir.path().join("sessions");
        fs::create_dir_all(&dir).expect("Failed to create sessions dir");
        dir
    }

    /// Write one session file into the sessions directory.
    pub fn with_session_file(&self, name: &str, json: &str) -> PathBuf {
        let dir = self.sessions_dir();
        let path = dir.join(name);
        fs::write(&path, json).expect("Failed to write session file");
        path
    }

    /// Path for the output HTML report.
    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("report.html")
    }
}

impl Default for InputDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for session file JSON documents.
pub struct SessionFileBuilder {
    id: Option<String>,
    cwd: Option<String>,
    git_url: Option<String>,
    branch: Option<String>,
    entries: Vec<(i64, String)>,
}

impl SessionFileBuilder {
    pub fn new() -> Self {
        Self { id: None, cwd: None, git_url: None, branch: None, entries: Vec::new() }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn git_url(mut self, url: &str) -> Self {
        self.git_url = Some(url.to_string());
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    pub fn entry(mut self, ts: i64, text: &str) -> Self {
        self.entries.push((ts, text.to_string()));
        self
    }

    pub fn to_json(&self) -> String {
        let mut doc = serde_json::Map::new();
        if let Some(id) = &self.id {
            doc.insert("id".to_string(), serde_json::json!(id));
        }
        if let Some(cwd) = &self.cwd {
            doc.insert("cwd".to_string(), serde_json::json!(cwd));
        }
        if self.git_url.is_some() || self.branch.is_some() {
            doc.insert(
                "git".to_string(),
                serde_json::json!({
                    "repository_url": self.git_url,
                    "branch": self.branch,
                }),
            );
        }
        let entries: Vec<_> = self
            .entries
            .iter()
            .map(|(ts, text)| serde_json::json!({"ts": ts, "text": text}))
            .collect();
        doc.insert("entries".to_string(), serde_json::json!(entries));
        serde_json::Value::Object(doc).to_string()
    }
}

impl Default for SessionFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
