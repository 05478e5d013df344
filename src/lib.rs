//! AI Project Launcher - Search Claude and ChatGPT projects from Alfred
//!
//! This library turns saved HTML snapshots of AI-assistant project listings into
//! datasets for the `afwf_fts_anything` Alfred workflow. It supports:
//!
//! - Extracting projects from Claude (`claude.ai/projects`) and ChatGPT sidebar pages
//! - Building the plugin's field and display settings for each site
//! - Publishing data, settings and icon, and clearing the plugin's stale index
//!
//! # Example
//!
//! ```no_run
//! use ai_project_launcher::{DatasetBundle, DatasetPublisher, FtsSettings};
//! use ai_project_launcher::parsers::parse_claude_project_html;
//!
//! let html = std::fs::read_to_string("html/claude_project_sh.html")?;
//! let projects = parse_claude_project_html(&html)?;
//! let bundle = DatasetBundle::from_records(
//!     "ClaudeProjectSh",
//!     &projects,
//!     FtsSettings::claude_project(),
//!     "icon/claude-icon.png",
//! )?;
//! DatasetPublisher::from_home()?.publish(&bundle)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod publisher;
pub mod utils;

// Re-export commonly used types
pub use models::{ChatGptProject, ClaudeProject, FtsSettings, ProjectRecord, SiteLayout};
pub use parsers::{parse_chatgpt_project_html, parse_claude_project_html};
pub use pipeline::{DatasetSource, default_sources, publish_all};
pub use publisher::{DatasetBundle, DatasetPublisher, PublishReport};
