//! Data models for extracted projects and published search settings.
//!
//! - [`ClaudeProject`] / [`ChatGptProject`] - Records scraped from saved listing pages
//! - [`ProjectRecord`] - Uniform conversion of a record into a flat JSON object
//! - [`SiteLayout`] - Which site a snapshot was saved from
//! - [`FtsSettings`] / [`FieldSetting`] - Indexing configuration for the search plugin

pub mod layout;
pub mod project;
pub mod settings;

pub use layout::SiteLayout;
pub use project::{ChatGptProject, ClaudeProject, ProjectRecord};
pub use settings::{FieldSetting, FtsSettings};
