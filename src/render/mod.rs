//! View-model assembly and HTML rendering.
//!
//! [`view_model`] maps the grouped domain objects into flat, fully-formatted
//! values; [`html`] feeds them to the embedded MiniJinja templates and writes
//! the report atomically. The template engine never computes anything - every
//! date string and count is precomputed here.

pub mod html;
pub mod view_model;

pub use html::{Renderer, write_report};
pub use view_model::{
    ConversationView, EntryView, NO_ACTIVITY, ProjectReportView, ProjectView, SessionPreview,
    SessionView, conversation_view, projects_view,
};
