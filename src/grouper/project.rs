use std::collections::HashMap;

use crate::models::{Project, Session};

/// Sentinel key for sessions with neither a Git URL nor a working directory.
pub const UNGROUPED_KEY: &str = "ungrouped";

/// Normalize a Git remote URL to a canonical `host/path` repository identity.
///
/// Both SSH-style (`git@host:org/repo.git`) and URL-style
/// (`https://host/org/repo.git`) remotes resolve to the identical key for the
/// same repository: the scheme and user-info are stripped, the trailing
/// `.git` and slashes are removed, and the host is lower-cased. Returns
/// `None` for strings with no recognizable host.
pub fn normalize_git_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let (authority, path) = if let Some((_scheme, rest)) = url.split_once("://") {
        rest.split_once('/').unwrap_or((rest, ""))
    } else if let Some((user_host, path)) = url.split_once(':') {
        // scp-like form, e.g. git@host:org/repo.git
        (user_host, path)
    } else {
        return None;
    };

    // Drop user-info, keep the host (and port, if any).
    let host = match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    };
    let host = host.to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path).trim_end_matches('/');

    if path.is_empty() { Some(host) } else { Some(format!("{}/{}", host, path)) }
}

/// Resolve the grouping key for a session, in priority order: normalized Git
/// URL, then working directory (trailing slash stripped), then the
/// [`UNGROUPED_KEY`] sentinel.
pub fn resolve_project_key(session: &Session) -> String {
    if let Some(url) = session.git.as_ref().and_then(|g| g.repository_url.as_deref()) {
        if let Some(key) = normalize_git_url(url) {
            return key;
        }
    }

    if let Some(dir) = session.working_directory.as_deref() {
        let trimmed = dir.trim_end_matches('/');
        return if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() };
    }

    UNGROUPED_KEY.to_string()
}

/// Short human name for a project key: its last path segment, or the key
/// itself when it has none (the sentinel label included).
fn display_name(key: &str) -> String {
    key.rsplit('/').find(|s| !s.is_empty()).unwrap_or(key).to_string()
}

/// Group sessions into projects keyed by resolved repository identity.
///
/// Sessions are expected in chronological order; the first session seen for a
/// key creates its Project and fixes the project's `git_url`,
/// `working_directory`, and `display_name` - later sessions with the same key
/// never overwrite them, even if their raw Git URL differs in form.
///
/// The returned projects are sorted by `total_entries` descending, ties
/// broken by `display_name` ascending.
pub fn group_projects(sessions: Vec<Session>) -> Vec<Project> {
    let mut projects: Vec<Project> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for session in sessions {
        let key = resolve_project_key(&session);
        let idx = match index.get(&key) {
            Some(&i) => i,
            None => {
                projects.push(Project {
                    display_name: display_name(&key),
                    project_key: key.clone(),
                    git_url: session.git.as_ref().and_then(|g| g.repository_url.clone()),
                    working_directory: session.working_directory.clone(),
                    sessions: Vec::new(),
                });
                index.insert(key, projects.len() - 1);
                projects.len() - 1
            }
        };
        projects[idx].sessions.push(session);
    }

    projects.sort_by(|a, b| {
        b.total_entries()
            .cmp(&a.total_entries())
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    projects
}
