//! HTML extractors for saved project listing pages
//!
//! # Layout Adapters
//!
//! Each supported site is described by a [`PageLayout`] adapter that knows the
//! site's origin, the `href` prefix of project links and how to read a record
//! out of one matching `<a>` element. Everything tied to third-party markup
//! (class names, attributes, URL shapes) lives inside the adapter, so a site
//! redesign only touches one file.
//!
//! # Error Handling Strategy
//!
//! Extraction is strict: when a matching link lacks an element the adapter
//! needs, the whole page fails with context naming the offending `href`.
//! Links without an `href` or with a non-matching prefix are ignored. Records
//! come back in document order, without deduplication or sorting.

pub mod chatgpt;
pub mod claude;

use anyhow::{Context, Result, anyhow};
use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};

pub use chatgpt::{ChatGptLayout, parse_chatgpt_project_html};
pub use claude::{ClaudeLayout, parse_claude_project_html};

use crate::models::{ProjectRecord, SiteLayout};
use crate::utils::terminal::preview;

/// Number of description characters echoed per record in debug logs
const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Site-specific knowledge needed to turn a listing page into records
pub trait PageLayout {
    type Record: ProjectRecord;

    /// Links whose `href` starts with this prefix are project links
    fn link_prefix(&self) -> &str;

    /// Build a record from a matching `<a>` element
    fn extract(&self, anchor: ElementRef<'_>, href: &str) -> Result<Self::Record>;
}

/// Scan every `<a>` of `html` and extract a record from each project link
///
/// # Errors
///
/// Returns the first adapter error, which aborts the whole page.
pub fn extract_projects<L: PageLayout>(layout: &L, html: &str) -> Result<Vec<L::Record>> {
    let document = Html::parse_document(html);
    let anchors = selector("a")?;
    let mut projects = Vec::new();

    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.starts_with(layout.link_prefix()) {
            continue;
        }

        let project = layout
            .extract(anchor, href)
            .with_context(|| format!("Failed to extract project from link {}", href))?;
        log_project(&project);
        projects.push(project);
    }

    Ok(projects)
}

/// Extract records with the adapter for `layout` and flatten them to JSON objects
pub fn extract_fields(layout: SiteLayout, html: &str) -> Result<Vec<Map<String, Value>>> {
    match layout {
        SiteLayout::Claude => to_field_maps(&extract_projects(&ClaudeLayout, html)?),
        SiteLayout::ChatGpt => to_field_maps(&extract_projects(&ChatGptLayout, html)?),
    }
}

fn to_field_maps<R: ProjectRecord>(records: &[R]) -> Result<Vec<Map<String, Value>>> {
    records.iter().map(ProjectRecord::to_fields).collect()
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid CSS selector {:?}: {:?}", css, e))
}

/// Text content of the first descendant of `parent` matching `css`, trimmed
pub(crate) fn descendant_text(parent: ElementRef<'_>, css: &str) -> Result<Option<String>> {
    let selector = selector(css)?;
    Ok(parent
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string()))
}

fn log_project<R: ProjectRecord>(project: &R) {
    tracing::debug!(
        name = %preview(project.name(), DESCRIPTION_PREVIEW_CHARS),
        description = %preview(project.description().unwrap_or_default(), DESCRIPTION_PREVIEW_CHARS),
        url = %project.url(),
        "Extracted project"
    );
}
