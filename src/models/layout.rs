use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::settings::FtsSettings;

/// Site a project listing snapshot was saved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SiteLayout {
    Claude,
    #[value(name = "chatgpt")]
    ChatGpt,
}

impl SiteLayout {
    /// Search settings preset for datasets of this site
    pub fn settings(self) -> FtsSettings {
        match self {
            SiteLayout::Claude => FtsSettings::claude_project(),
            SiteLayout::ChatGpt => FtsSettings::chatgpt_project(),
        }
    }
}

impl fmt::Display for SiteLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteLayout::Claude => write!(f, "claude"),
            SiteLayout::ChatGpt => write!(f, "chatgpt"),
        }
    }
}
