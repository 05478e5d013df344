//! Dataset publishing into the `afwf_fts_anything` data directory
//!
//! For a dataset named `D` the plugin expects, inside its data directory:
//!
//! - `D-data.json`: JSON array of flat record objects
//! - `D-setting.json`: field and display settings
//! - `D-icon/<icon file>`: icon shown next to every result
//! - `D-whoosh_index/`: search index the plugin builds on first query
//! - `.cache/`: query cache shared by all datasets
//!
//! Publishing rewrites the first three and deletes the last two, so the next
//! query rebuilds the index from fresh data.
//!
//! # Error Handling Strategy
//!
//! - **Inputs first**: the dataset name and icon are checked before anything
//!   is written, so a bad bundle leaves the dataset's previous files as they were.
//! - **Whole-file writes**: data and settings are replaced via temp file + rename.
//! - **Best-effort invalidation**: a missing index or cache directory is fine;
//!   other removal failures are logged as warnings and do not fail the publish.
//!
//! The three writes are not atomic as a group; the tool is re-run by hand.

pub mod atomic;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use self::atomic::{remove_dir_if_exists, to_json_bytes, write_replace};
use crate::models::{FtsSettings, ProjectRecord};
use crate::utils::{get_fts_dir, validate_dataset_name};

const CACHE_DIR_NAME: &str = ".cache";

/// Everything needed to publish one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBundle {
    pub dataset_name: String,
    pub records: Vec<Map<String, Value>>,
    pub settings: FtsSettings,
    pub icon_path: PathBuf,
}

impl DatasetBundle {
    pub fn new(
        dataset_name: impl Into<String>,
        records: Vec<Map<String, Value>>,
        settings: FtsSettings,
        icon_path: impl Into<PathBuf>,
    ) -> Self {
        Self { dataset_name: dataset_name.into(), records, settings, icon_path: icon_path.into() }
    }

    /// Bundle typed project records
    pub fn from_records<R: ProjectRecord>(
        dataset_name: impl Into<String>,
        records: &[R],
        settings: FtsSettings,
        icon_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let records = records.iter().map(ProjectRecord::to_fields).collect::<Result<_>>()?;
        Ok(Self::new(dataset_name, records, settings, icon_path))
    }
}

/// Outcome of publishing one dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub dataset_name: String,
    pub record_count: usize,
    pub data_path: PathBuf,
    pub setting_path: PathBuf,
    pub icon_path: PathBuf,
    pub index_removed: bool,
    pub cache_removed: bool,
}

/// Writes datasets into one plugin data directory
#[derive(Debug, Clone)]
pub struct DatasetPublisher {
    fts_dir: PathBuf,
}

impl DatasetPublisher {
    pub fn new(fts_dir: impl Into<PathBuf>) -> Self {
        Self { fts_dir: fts_dir.into() }
    }

    /// Publisher for `~/.alfred-afwf/afwf_fts_anything`
    pub fn from_home() -> Result<Self> {
        Ok(Self::new(get_fts_dir()?))
    }

    pub fn fts_dir(&self) -> &Path {
        &self.fts_dir
    }

    pub fn data_path(&self, dataset_name: &str) -> PathBuf {
        self.fts_dir.join(format!("{}-data.json", dataset_name))
    }

    pub fn setting_path(&self, dataset_name: &str) -> PathBuf {
        self.fts_dir.join(format!("{}-setting.json", dataset_name))
    }

    pub fn icon_dir(&self, dataset_name: &str) -> PathBuf {
        self.fts_dir.join(format!("{}-icon", dataset_name))
    }

    pub fn index_dir(&self, dataset_name: &str) -> PathBuf {
        self.fts_dir.join(format!("{}-whoosh_index", dataset_name))
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.fts_dir.join(CACHE_DIR_NAME)
    }

    /// Write data, settings and icon for a dataset, then drop its stale index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dataset name is not a valid single path component
    /// - The icon is missing, unreadable, or has no file name
    /// - The plugin directory or any output file cannot be written
    pub fn publish(&self, bundle: &DatasetBundle) -> Result<PublishReport> {
        let name = bundle.dataset_name.as_str();
        validate_dataset_name(name)?;

        let icon_file_name = bundle
            .icon_path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid icon path: {}", bundle.icon_path.display()))?;
        let icon_bytes = fs::read(&bundle.icon_path)
            .with_context(|| format!("Failed to read icon: {}", bundle.icon_path.display()))?;

        fs::create_dir_all(&self.fts_dir).with_context(|| {
            format!("Failed to create plugin directory: {}", self.fts_dir.display())
        })?;

        let data_path = self.data_path(name);
        let data = to_json_bytes(&bundle.records)
            .with_context(|| format!("Failed to serialize records for {}", name))?;
        write_replace(&data_path, &data)?;

        let setting_path = self.setting_path(name);
        let settings = bundle.settings.clone().with_icon(icon_file_name);
        let settings = to_json_bytes(&settings)
            .with_context(|| format!("Failed to serialize settings for {}", name))?;
        write_replace(&setting_path, &settings)?;

        let icon_dir = self.icon_dir(name);
        fs::create_dir_all(&icon_dir)
            .with_context(|| format!("Failed to create icon directory: {}", icon_dir.display()))?;
        let icon_path = icon_dir.join(icon_file_name);
        write_replace(&icon_path, &icon_bytes)?;

        let index_removed = self.invalidate(&self.index_dir(name));
        let cache_removed = self.invalidate(&self.cache_dir());

        tracing::info!(
            dataset = name,
            records = bundle.records.len(),
            path = %data_path.display(),
            "Published dataset"
        );

        Ok(PublishReport {
            dataset_name: name.to_string(),
            record_count: bundle.records.len(),
            data_path,
            setting_path,
            icon_path,
            index_removed,
            cache_removed,
        })
    }

    fn invalidate(&self, dir: &Path) -> bool {
        match remove_dir_if_exists(dir) {
            Ok(removed) => {
                if removed {
                    tracing::debug!(path = %dir.display(), "Removed stale directory");
                }
                removed
            }
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "Failed to remove directory");
                false
            }
        }
    }
}
