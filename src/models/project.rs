use chrono::{DateTime, Utc};

use crate::models::Session;

/// Sessions grouped under one resolved repository identity.
///
/// `project_key` is the normalized identity (see
/// [`resolve_project_key`](crate::grouper::project::resolve_project_key));
/// `git_url` and `working_directory` are captured from the first session seen
/// for that key and not overwritten by later sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub project_key: String,
    pub display_name: String,
    pub git_url: Option<String>,
    pub working_directory: Option<String>,
    pub sessions: Vec<Session>,
}

impl Project {
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Total number of entries across all sessions in this project.
    pub fn total_entries(&self) -> usize {
        self.sessions.iter().map(Session::entry_count).sum()
    }

    /// Earliest start and latest end across all sessions that have entries.
    ///
    /// Entry-less sessions are excluded from the min/max; if no session has
    /// entries the range is `None`, never a fabricated timestamp.
    pub fn date_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.sessions.iter().filter_map(Session::start_time).min()?;
        let end = self.sessions.iter().filter_map(Session::end_time).max()?;
        Some((start, end))
    }
}
