use anyhow::{Context, Result, bail};
use scraper::ElementRef;

use super::{PageLayout, extract_projects};
use crate::models::ChatGptProject;

const CHATGPT_ORIGIN: &str = "https://chatgpt.com";
const PROJECT_LINK_PREFIX: &str = "/g/g-p";

/// Hyphen-separated segments of the `href` that identify the project
/// (`/g/g` + `p` + id); anything after them is the name slug.
const ID_SEGMENTS: usize = 3;

/// Project links in the `https://chatgpt.com` sidebar
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatGptLayout;

impl PageLayout for ChatGptLayout {
    type Record = ChatGptProject;

    fn link_prefix(&self) -> &str {
        PROJECT_LINK_PREFIX
    }

    fn extract(&self, anchor: ElementRef<'_>, href: &str) -> Result<ChatGptProject> {
        let name = anchor
            .value()
            .attr("title")
            .context("Project link has no title attribute")?
            .trim()
            .to_string();
        if name.is_empty() {
            bail!("Project link has an empty title attribute");
        }

        Ok(ChatGptProject { url: canonical_project_url(href), name })
    }
}

/// Rebuild a slug-independent project URL from a sidebar link
///
/// `/g/g-p-123-my-project` becomes `https://chatgpt.com/g/g-p-123/project`, so
/// renaming a project does not produce a new URL. The prefix is appended to
/// the origin as-is.
pub fn canonical_project_url(href: &str) -> String {
    let prefix = href.split('-').take(ID_SEGMENTS).collect::<Vec<_>>().join("-");
    format!("{}{}/project", CHATGPT_ORIGIN, prefix)
}

/// Parse a saved ChatGPT page into project records
///
/// The name is the link's `title` attribute with surrounding whitespace
/// trimmed.
///
/// # Examples
///
/// ```
/// use ai_project_launcher::parsers::parse_chatgpt_project_html;
///
/// let html = r#"<a href="/g/g-p-123-abc-extra-stuff" title="My Project">My Project</a>"#;
/// let projects = parse_chatgpt_project_html(html)?;
/// assert_eq!(projects[0].url, "https://chatgpt.com/g/g-p-123/project");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_chatgpt_project_html(html: &str) -> Result<Vec<ChatGptProject>> {
    extract_projects(&ChatGptLayout, html)
}
