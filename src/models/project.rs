use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project card from the claude.ai project listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaudeProject {
    pub url: String,
    pub name: String,
    pub description: String,
}

/// A project link from the chatgpt.com sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatGptProject {
    pub url: String,
    pub name: String,
}

/// Common view over extracted project records
///
/// Records are flattened into a JSON object whose keys match the field names
/// referenced by the search settings (`{name}`, `{url}`, ...).
pub trait ProjectRecord: Serialize {
    fn name(&self) -> &str;
    fn url(&self) -> &str;

    /// Optional longer text shown in diagnostics
    fn description(&self) -> Option<&str> {
        None
    }

    fn to_fields(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self).context("Failed to serialize project record")? {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!("Project record serialized to non-object JSON: {}", other),
        }
    }
}

impl ProjectRecord for ClaudeProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}

impl ProjectRecord for ChatGptProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &str {
        &self.url
    }
}
