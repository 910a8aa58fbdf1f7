use chrono::{DateTime, Utc};

/// A single entry from a Codex history log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// Git repository metadata recorded in a Codex session file.
///
/// Every field is optional; absence is represented with `None` rather than an
/// empty string so key resolution can branch on presence unambiguously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitInfo {
    pub repository_url: Option<String>,
    pub branch: Option<String>,
    pub commit_hash: Option<String>,
}

/// An ordered run of entries sharing one session identifier.
///
/// Entries are sorted ascending by timestamp before construction and never
/// mutated afterwards. Sessions built from the flat history log carry no
/// metadata; sessions built from session files may carry a working directory,
/// Git info, and free-text instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub entries: Vec<Entry>,
    pub working_directory: Option<String>,
    pub git: Option<GitInfo>,
    pub instructions: Option<String>,
}

impl Session {
    /// Create a session with no metadata, as grouped from the flat log.
    pub fn new(session_id: String, entries: Vec<Entry>) -> Self {
        Self { session_id, entries, working_directory: None, git: None, instructions: None }
    }

    /// Timestamp of the earliest entry, or `None` for an entry-less session.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|e| e.timestamp).min()
    }

    /// Timestamp of the latest entry, or `None` for an entry-less session.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().map(|e| e.timestamp).max()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// All sessions of one flat-log run, ordered by start time ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    pub sessions: Vec<Session>,
}

impl Conversation {
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Total number of entries across all sessions.
    pub fn total_entries(&self) -> usize {
        self.sessions.iter().map(Session::entry_count).sum()
    }
}
