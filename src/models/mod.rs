//! Data models for Codex conversation logs.
//!
//! This module defines the domain structures produced by the groupers:
//!
//! - [`Entry`] - A single timestamped text entry from history.jsonl
//! - [`Session`] - An ordered run of entries sharing a session identifier
//! - [`Conversation`] - All sessions of a flat-log run, in chronological order
//! - [`GitInfo`] - Repository metadata carried by a session file
//! - [`Project`] - Sessions grouped under one resolved repository identity
//!
//! All structures are immutable once grouping completes; derived values
//! (start/end times, counts, date ranges) are computed on access from the
//! stored entries so they can never go stale.

pub mod history;
pub mod project;

pub use history::{Conversation, Entry, GitInfo, Session};
pub use project::Project;
