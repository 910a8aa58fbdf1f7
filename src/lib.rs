//! codex-log - Convert Codex CLI conversation logs into static HTML reports
//!
//! This library converts the append-only logs written by the Codex CLI into
//! self-contained HTML reports. It supports two input shapes:
//!
//! - Parsing user entries from a flat `history.jsonl` file and grouping them
//!   into chronologically ordered sessions
//! - Parsing a directory of per-session files (with Git and working-directory
//!   metadata) and grouping sessions into projects keyed by repository identity
//!
//! # Example
//!
//! ```no_run
//! use codex_log::{group_history, parse_history_file};
//! use std::path::Path;
//!
//! let parsed = parse_history_file(Path::new("/Users/alice/.codex/history.jsonl"))?;
//! let conversation = group_history(parsed.records);
//! println!("Found {} sessions", conversation.sessions.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod grouper;
pub mod models;
pub mod parsers;
pub mod render;

// Re-export commonly used types
pub use grouper::flat::group_history;
pub use grouper::project::{group_projects, normalize_git_url, resolve_project_key};
pub use models::{Conversation, Entry, GitInfo, Project, Session};
pub use parsers::history::parse_history_file;
pub use parsers::session_file::parse_sessions_dir;
