use anyhow::{Context, Result, bail};
use scraper::ElementRef;

use super::{PageLayout, descendant_text, extract_projects};
use crate::models::ClaudeProject;

const CLAUDE_ORIGIN: &str = "https://claude.ai";
const PROJECT_LINK_PREFIX: &str = "/project/";

/// `<div class="truncate">Project Name</div>`
const NAME_SELECTOR: &str = "div.truncate";
/// `<div class="text-text-300 mt-1 line-clamp-3 text-sm flex-grow">Description</div>`
const DESCRIPTION_SELECTOR: &str = "div.text-text-300";

/// Project cards on `https://claude.ai/projects`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeLayout;

impl PageLayout for ClaudeLayout {
    type Record = ClaudeProject;

    fn link_prefix(&self) -> &str {
        PROJECT_LINK_PREFIX
    }

    fn extract(&self, anchor: ElementRef<'_>, href: &str) -> Result<ClaudeProject> {
        let name = descendant_text(anchor, NAME_SELECTOR)?
            .with_context(|| format!("Project card has no name element ({})", NAME_SELECTOR))?;
        if name.is_empty() {
            bail!("Project card has an empty name");
        }

        let description = descendant_text(anchor, DESCRIPTION_SELECTOR)?.with_context(|| {
            format!("Project card has no description element ({})", DESCRIPTION_SELECTOR)
        })?;

        Ok(ClaudeProject { url: format!("{}{}", CLAUDE_ORIGIN, href), name, description })
    }
}

/// Parse a saved Claude projects page into project records
///
/// Name and description are the text of their elements with surrounding
/// whitespace trimmed, so `<div class="truncate">Name </div>` yields `"Name"`.
///
/// # Examples
///
/// ```
/// use ai_project_launcher::parsers::parse_claude_project_html;
///
/// let html = r#"<a href="/project/abc"><div class="truncate">Foo</div><div class="text-text-300">Bar</div></a>"#;
/// let projects = parse_claude_project_html(html)?;
/// assert_eq!(projects[0].url, "https://claude.ai/project/abc");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_claude_project_html(html: &str) -> Result<Vec<ClaudeProject>> {
    extract_projects(&ClaudeLayout, html)
}
