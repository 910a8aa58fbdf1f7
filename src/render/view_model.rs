use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Conversation, Project, Session};

/// Placeholder shown when a session or project has no dated entries.
///
/// The field is always present in the view model so template lookups never
/// fail on a missing key.
pub const NO_ACTIVITY: &str = "no activity";

/// How many sessions a project card previews, most recent first.
const RECENT_SESSION_LIMIT: usize = 5;

/// Longest first-entry snippet shown in a project's session preview.
const SNIPPET_CHAR_LIMIT: usize = 120;

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub started: String,
    pub ended: String,
    pub entry_count: usize,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Serialize)]
pub struct ConversationView {
    pub session_count: usize,
    pub total_entries: usize,
    pub sessions: Vec<SessionView>,
}

#[derive(Debug, Serialize)]
pub struct SessionPreview {
    pub session_id: String,
    pub started: String,
    pub entry_count: usize,
    pub snippet: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub git_url: Option<String>,
    pub git_branch: Option<String>,
    pub working_directory: Option<String>,
    pub session_count: usize,
    pub total_entries: usize,
    pub date_range: String,
    pub recent_sessions: Vec<SessionPreview>,
}

#[derive(Debug, Serialize)]
pub struct ProjectReportView {
    pub project_count: usize,
    pub session_count: usize,
    pub total_entries: usize,
    pub projects: Vec<ProjectView>,
}

fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

fn format_optional(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| NO_ACTIVITY.to_string())
}

fn session_view(session: &Session) -> SessionView {
    SessionView {
        session_id: session.session_id.clone(),
        started: format_optional(session.start_time()),
        ended: format_optional(session.end_time()),
        entry_count: session.entry_count(),
        entries: session
            .entries
            .iter()
            .map(|e| EntryView { timestamp: format_datetime(e.timestamp), text: e.text.clone() })
            .collect(),
    }
}

fn session_preview(session: &Session) -> SessionPreview {
    let snippet = session
        .entries
        .first()
        .map(|e| e.text.chars().take(SNIPPET_CHAR_LIMIT).collect())
        .unwrap_or_default();
    SessionPreview {
        session_id: session.session_id.clone(),
        started: format_optional(session.start_time()),
        entry_count: session.entry_count(),
        snippet,
    }
}

/// Assemble the flat-mode view model. Pure function; all formatting happens
/// here and nothing is left for the template to compute.
pub fn conversation_view(conversation: &Conversation) -> ConversationView {
    ConversationView {
        session_count: conversation.session_count(),
        total_entries: conversation.total_entries(),
        sessions: conversation.sessions.iter().map(session_view).collect(),
    }
}

fn project_view(project: &Project) -> ProjectView {
    let date_range = match project.date_range() {
        Some((start, end)) => format!("{} to {}", format_date(start), format_date(end)),
        None => NO_ACTIVITY.to_string(),
    };

    // Most recent sessions first for the preview.
    let recent_sessions =
        project.sessions.iter().rev().take(RECENT_SESSION_LIMIT).map(session_preview).collect();

    ProjectView {
        name: project.display_name.clone(),
        git_url: project.git_url.clone(),
        git_branch: project
            .sessions
            .iter()
            .find_map(|s| s.git.as_ref().and_then(|g| g.branch.clone())),
        working_directory: project.working_directory.clone(),
        session_count: project.session_count(),
        total_entries: project.total_entries(),
        date_range,
        recent_sessions,
    }
}

/// Assemble the project-mode view model from the ordered project list.
pub fn projects_view(projects: &[Project]) -> ProjectReportView {
    ProjectReportView {
        project_count: projects.len(),
        session_count: projects.iter().map(Project::session_count).sum(),
        total_entries: projects.iter().map(Project::total_entries).sum(),
        projects: projects.iter().map(project_view).collect(),
    }
}
