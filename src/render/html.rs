use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minijinja::Environment;

use crate::render::view_model::{ConversationView, ProjectReportView};

const CONVERSATION_TEMPLATE: &str = include_str!("../templates/conversation.html");
const PROJECTS_TEMPLATE: &str = include_str!("../templates/projects.html");

/// HTML renderer backed by the embedded MiniJinja templates.
///
/// Auto-escaping is on (the templates are registered under `.html` names),
/// so entry text is always escaped in the output.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("conversation.html", CONVERSATION_TEMPLATE)
            .context("Failed to load conversation template")?;
        env.add_template("projects.html", PROJECTS_TEMPLATE)
            .context("Failed to load projects template")?;
        Ok(Self { env })
    }

    /// Render the flat-mode report to a complete HTML document.
    pub fn render_conversation(&self, view: &ConversationView) -> Result<String> {
        let template = self.env.get_template("conversation.html")?;
        template.render(view).context("Failed to render conversation report")
    }

    /// Render the project-mode report to a complete HTML document.
    pub fn render_projects(&self, view: &ProjectReportView) -> Result<String> {
        let template = self.env.get_template("projects.html")?;
        template.render(view).context("Failed to render projects report")
    }
}

/// Write the fully rendered document to `path`.
///
/// The document is written to a sibling temporary file and renamed into
/// place, so the destination is only ever touched by a complete report and a
/// failed run leaves no partial output.
pub fn write_report(html: &str, path: &Path) -> Result<()> {
    let mut tmp_name = path
        .file_name()
        .with_context(|| format!("Output path has no file name: {}", path.display()))?
        .to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, html)
        .with_context(|| format!("Failed to write output file: {}", tmp_path.display()))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e)
            .with_context(|| format!("Failed to move report into place: {}", path.display()));
    }
    Ok(())
}
