//! Grouping and aggregation over decoded log records.
//!
//! This is the core of the converter:
//!
//! - [`flat`] collapses the flat history stream into ordered [`Session`]s
//!   wrapped in a [`Conversation`]
//! - [`project`] collapses session files into [`Project`]s keyed by a
//!   normalized repository identity, with per-project aggregates
//!
//! Both groupers assume their input has already passed the parse boundary
//! and is structurally valid.
//!
//! [`Session`]: crate::models::Session
//! [`Conversation`]: crate::models::Conversation
//! [`Project`]: crate::models::Project

pub mod flat;
pub mod project;

pub use flat::group_history;
pub use project::{group_projects, normalize_git_url, resolve_project_key};
