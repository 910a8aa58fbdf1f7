//! Decode boundary for Codex log files.
//!
//! Everything that can go wrong with an individual record is handled here:
//! malformed JSON lines and session files are skipped with a warning and
//! counted, so the groupers downstream may assume structurally valid input.
//! Only path-level failures (unreadable file or directory) propagate as
//! errors.

pub mod deserializers;
pub mod history;
pub mod session_file;

pub use history::{HistoryRecord, ParsedHistory, parse_history_file};
pub use session_file::{ParsedSessions, parse_sessions_dir};
