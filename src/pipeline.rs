//! Source-to-dataset pipeline
//!
//! Each [`DatasetSource`] names one saved HTML page, the site layout it was
//! saved from, the icon to show, and the dataset it publishes to. Sources run
//! one after another; a failing source is reported with its dataset name and
//! does not stop the remaining ones.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::models::SiteLayout;
use crate::parsers::extract_fields;
use crate::publisher::{DatasetBundle, DatasetPublisher, PublishReport};
use crate::utils::read_html_file;

/// One saved page to publish as a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    pub dataset_name: String,
    pub layout: SiteLayout,
    pub html_path: PathBuf,
    pub icon_path: PathBuf,
}

impl DatasetSource {
    pub fn new(
        dataset_name: impl Into<String>,
        layout: SiteLayout,
        html_path: impl Into<PathBuf>,
        icon_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            layout,
            html_path: html_path.into(),
            icon_path: icon_path.into(),
        }
    }

    /// Resolve relative paths against `base_dir`
    pub fn resolve_against(mut self, base_dir: &Path) -> Self {
        self.html_path = base_dir.join(&self.html_path);
        self.icon_path = base_dir.join(&self.icon_path);
        self
    }
}

/// The tracked accounts, laid out as `html/` and `icon/` under `base_dir`
pub fn default_sources(base_dir: &Path) -> Vec<DatasetSource> {
    vec![
        // Personal Claude account
        DatasetSource::new(
            "ClaudeProjectSh",
            SiteLayout::Claude,
            "html/claude_project_sh.html",
            "icon/claude-icon.png",
        ),
        // Work Claude account
        DatasetSource::new(
            "ClaudeProjectEsc",
            SiteLayout::Claude,
            "html/claude_project_esc.html",
            "icon/claude-icon.png",
        ),
        // Personal ChatGPT account
        DatasetSource::new(
            "ChatGPTProjectSh",
            SiteLayout::ChatGpt,
            "html/chatgpt_project_sh.html",
            "icon/chatgpt-icon.png",
        ),
    ]
    .into_iter()
    .map(|source| source.resolve_against(base_dir))
    .collect()
}

/// Load sources from a JSON manifest (an array of [`DatasetSource`])
///
/// Relative `html_path` / `icon_path` entries resolve against `base_dir`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid manifest.
pub fn load_manifest(path: &Path, base_dir: &Path) -> Result<Vec<DatasetSource>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    let sources: Vec<DatasetSource> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
    Ok(sources.into_iter().map(|source| source.resolve_against(base_dir)).collect())
}

/// Reject source lists that would publish two datasets to the same files
///
/// Names are compared case-insensitively: the plugin usually lives on a
/// case-insensitive volume, where `Foo-data.json` and `foo-data.json` are one file.
pub fn check_unique_names(sources: &[DatasetSource]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for source in sources {
        let key = source.dataset_name.to_lowercase();
        if let Some(previous) = seen.insert(key, &source.dataset_name) {
            if previous == source.dataset_name {
                bail!("Duplicate dataset name: {}", source.dataset_name);
            }
            bail!(
                "Dataset names {} and {} differ only by case",
                previous,
                source.dataset_name
            );
        }
    }
    Ok(())
}

/// Read and extract one source into a publishable bundle
pub fn build_bundle(source: &DatasetSource) -> Result<DatasetBundle> {
    let html = read_html_file(&source.html_path)?;
    let records = extract_fields(source.layout, &html)
        .with_context(|| format!("Failed to parse {}", source.html_path.display()))?;

    Ok(DatasetBundle::new(
        source.dataset_name.clone(),
        records,
        source.layout.settings(),
        source.icon_path.clone(),
    ))
}

/// Extract and publish a single source
pub fn publish_source(publisher: &DatasetPublisher, source: &DatasetSource) -> Result<PublishReport> {
    let bundle = build_bundle(source)?;
    publisher.publish(&bundle)
}

/// A dataset that could not be published
#[derive(Debug)]
pub struct PublishFailure {
    pub dataset_name: String,
    pub error: anyhow::Error,
}

/// Results of publishing a list of sources
#[derive(Debug, Default)]
pub struct PublishOutcome {
    pub reports: Vec<PublishReport>,
    pub failures: Vec<PublishFailure>,
}

impl PublishOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Collapse into the reports, or an error naming every failed dataset
    pub fn into_result(self) -> Result<Vec<PublishReport>> {
        if self.failures.is_empty() {
            return Ok(self.reports);
        }
        let names: Vec<_> = self.failures.iter().map(|f| f.dataset_name.as_str()).collect();
        bail!(
            "{} of {} datasets failed to publish: {}",
            self.failures.len(),
            self.failures.len() + self.reports.len(),
            names.join(", ")
        )
    }
}

/// Publish every source in order
///
/// # Errors
///
/// Returns an error only for duplicate dataset names, before anything is
/// written. Per-source failures are logged and collected in the outcome.
pub fn publish_all(publisher: &DatasetPublisher, sources: &[DatasetSource]) -> Result<PublishOutcome> {
    check_unique_names(sources)?;

    let mut outcome = PublishOutcome::default();
    for source in sources {
        match publish_source(publisher, source) {
            Ok(report) => outcome.reports.push(report),
            Err(error) => {
                tracing::error!(dataset = %source.dataset_name, "Failed to publish dataset: {:#}", error);
                outcome
                    .failures
                    .push(PublishFailure { dataset_name: source.dataset_name.clone(), error });
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const CLAUDE_HTML: &str = r#"<a href="/project/abc"><div class="truncate">Foo</div><div class="text-text-300">Bar</div></a>"#;

    #[test]
    fn test_default_sources() {
        let sources = default_sources(Path::new("/work"));
        let names: Vec<_> = sources.iter().map(|s| s.dataset_name.as_str()).collect();

        assert_eq!(names, vec!["ClaudeProjectSh", "ClaudeProjectEsc", "ChatGPTProjectSh"]);
        assert_eq!(sources[0].html_path, PathBuf::from("/work/html/claude_project_sh.html"));
        assert_eq!(sources[1].icon_path, PathBuf::from("/work/icon/claude-icon.png"));
        assert_eq!(sources[2].layout, SiteLayout::ChatGpt);
        assert!(check_unique_names(&sources).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let sources = vec![
            DatasetSource::new("Same", SiteLayout::Claude, "a.html", "a.png"),
            DatasetSource::new("Same", SiteLayout::ChatGpt, "b.html", "b.png"),
        ];
        let err = check_unique_names(&sources).unwrap_err();
        assert!(err.to_string().contains("Same"));
    }

    #[test]
    fn test_names_differing_only_by_case_rejected() {
        let sources = vec![
            DatasetSource::new("ClaudeProjectSh", SiteLayout::Claude, "a.html", "a.png"),
            DatasetSource::new("claudeprojectsh", SiteLayout::Claude, "b.html", "b.png"),
        ];
        let message = check_unique_names(&sources).unwrap_err().to_string();
        assert!(message.contains("ClaudeProjectSh"), "{}", message);
        assert!(message.contains("claudeprojectsh"), "{}", message);
    }

    #[test]
    fn test_load_manifest_resolves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("sources.json");
        fs::write(
            &manifest,
            r#"[
                {"dataset_name": "Mine", "layout": "claude", "html_path": "pages/mine.html", "icon_path": "/abs/icon.png"}
            ]"#,
        )
        .unwrap();

        let sources = load_manifest(&manifest, temp.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].html_path, temp.path().join("pages/mine.html"));
        assert_eq!(sources[0].icon_path, PathBuf::from("/abs/icon.png"));
    }

    #[test]
    fn test_load_manifest_unknown_layout() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("sources.json");
        fs::write(
            &manifest,
            r#"[{"dataset_name": "X", "layout": "gemini", "html_path": "x", "icon_path": "y"}]"#,
        )
        .unwrap();
        assert!(load_manifest(&manifest, temp.path()).is_err());
    }

    #[test]
    fn test_build_bundle() {
        let temp = TempDir::new().unwrap();
        let html = temp.path().join("page.html");
        fs::write(&html, CLAUDE_HTML).unwrap();

        let source = DatasetSource::new("Mine", SiteLayout::Claude, &html, temp.path().join("i.png"));
        let bundle = build_bundle(&source).unwrap();

        assert_eq!(bundle.dataset_name, "Mine");
        assert_eq!(bundle.records.len(), 1);
        assert_eq!(bundle.settings, SiteLayout::Claude.settings());
    }

    #[test]
    fn test_publish_all_isolates_failures() {
        let temp = TempDir::new().unwrap();
        let html = temp.path().join("page.html");
        let icon = temp.path().join("icon.png");
        fs::write(&html, CLAUDE_HTML).unwrap();
        fs::write(&icon, b"png").unwrap();

        let sources = vec![
            DatasetSource::new("Broken", SiteLayout::Claude, temp.path().join("missing.html"), &icon),
            DatasetSource::new("Works", SiteLayout::Claude, &html, &icon),
        ];
        let publisher = DatasetPublisher::new(temp.path().join("fts"));
        let outcome = publish_all(&publisher, &sources).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.reports[0].dataset_name, "Works");
        assert_eq!(outcome.failures[0].dataset_name, "Broken");
        assert!(publisher.data_path("Works").exists());

        let err = outcome.into_result().unwrap_err();
        assert!(err.to_string().contains("1 of 2 datasets failed to publish: Broken"));
    }

    #[test]
    fn test_publish_all_empty_sources() {
        let temp = TempDir::new().unwrap();
        let publisher = DatasetPublisher::new(temp.path());
        let outcome = publish_all(&publisher, &[]).unwrap();
        assert!(outcome.into_result().unwrap().is_empty());
    }
}
