//! Search settings consumed by the `afwf_fts_anything` Alfred plugin
//!
//! A settings file tells the plugin how to index each record field and which
//! fields to show in the result row. Templates such as `"{name}"` reference
//! keys of the records in the matching data file.

use serde::{Deserialize, Serialize};

const NAME_NGRAM_MIN: u32 = 2;
const NAME_NGRAM_MAX: u32 = 10;
const NAME_WEIGHT: f64 = 5.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Indexing options for a single record field
///
/// Options that are not set are left out of the JSON so the plugin applies
/// its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSetting {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub type_is_store: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub type_is_ngram_words: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngram_maxsize: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngram_minsize: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub type_is_phrase: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FieldSetting {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_is_store: false,
            type_is_ngram_words: false,
            ngram_maxsize: None,
            ngram_minsize: None,
            type_is_phrase: false,
            weight: None,
        }
    }

    /// Keep the raw value so it can be rendered in results
    pub fn stored(mut self) -> Self {
        self.type_is_store = true;
        self
    }

    /// Tokenize into n-grams for fuzzy matching
    pub fn ngram_words(mut self, min: u32, max: u32) -> Self {
        self.type_is_ngram_words = true;
        self.ngram_minsize = Some(min);
        self.ngram_maxsize = Some(max);
        self
    }

    pub fn phrase(mut self) -> Self {
        self.type_is_phrase = true;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Full settings document written to `{dataset}-setting.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtsSettings {
    pub fields: Vec<FieldSetting>,
    pub title_field: String,
    pub arg_field: String,
    pub autocomplete_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_field: Option<String>,
}

impl FtsSettings {
    /// Fields shared by every project dataset: a heavily weighted fuzzy `name`
    /// and a stored-only `url` used as the launch argument.
    pub fn base() -> Self {
        Self {
            fields: vec![
                FieldSetting::new("name")
                    .stored()
                    .ngram_words(NAME_NGRAM_MIN, NAME_NGRAM_MAX)
                    .weight(NAME_WEIGHT),
                FieldSetting::new("url").stored(),
            ],
            title_field: "{name}".to_string(),
            arg_field: "{url}".to_string(),
            autocomplete_field: "{name}".to_string(),
            subtitle_field: None,
            icon_field: None,
        }
    }

    /// Claude projects also index their description and show it as subtitle
    pub fn claude_project() -> Self {
        let mut settings = Self::base();
        settings.fields.push(
            FieldSetting::new("description").stored().phrase().weight(DESCRIPTION_WEIGHT),
        );
        settings.with_subtitle("{description}")
    }

    /// ChatGPT projects have no description, so the URL is the subtitle
    pub fn chatgpt_project() -> Self {
        Self::base().with_subtitle("{url}")
    }

    pub fn with_subtitle(mut self, template: impl Into<String>) -> Self {
        self.subtitle_field = Some(template.into());
        self
    }

    pub fn with_icon(mut self, icon_file_name: impl Into<String>) -> Self {
        self.icon_field = Some(icon_file_name.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSetting> {
        self.fields.iter().find(|f| f.name == name)
    }
}
