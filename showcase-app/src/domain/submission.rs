use serde::{Deserialize, Serialize};
use showcase_errors::AppError;

use super::startup_idea::{non_blank, Socials};

/// Raw form input for a new pitch, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSubmission {
    pub startup_name: String,
    pub founder_name: String,
    pub description: String,
    pub tags_raw: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub socials: Socials,
}

impl IdeaSubmission {
    pub fn new(
        startup_name: impl Into<String>,
        founder_name: impl Into<String>,
        description: impl Into<String>,
        tags_raw: impl Into<String>,
    ) -> Self {
        Self {
            startup_name: startup_name.into(),
            founder_name: founder_name.into(),
            description: description.into(),
            tags_raw: tags_raw.into(),
            logo: None,
            socials: Socials::default(),
        }
    }

    pub fn with_logo(mut self, logo: Option<String>) -> Self {
        self.logo = logo;
        self
    }

    pub fn with_socials(mut self, socials: Socials) -> Self {
        self.socials = socials;
        self
    }
}

/// A submission that passed validation. Only the store turns it into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub startup_name: String,
    pub founder_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub logo: Option<String>,
    pub socials: Socials,
}

fn require(value: &str, field: &str) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| AppError::Validation(field.to_string()))
}

impl TryFrom<IdeaSubmission> for IdeaDraft {
    type Error = AppError;

    fn try_from(value: IdeaSubmission) -> Result<Self, Self::Error> {
        let startup_name = require(&value.startup_name, "startup name")?;
        let founder_name = require(&value.founder_name, "founder name")?;
        let description = require(&value.description, "description")?;
        let tags_raw = require(&value.tags_raw, "tags")?;

        Ok(Self {
            startup_name,
            founder_name,
            description,
            tags: parse_tags(&tags_raw),
            logo: value.logo.as_deref().and_then(non_blank),
            socials: value.socials.normalized(),
        })
    }
}

/// Splits a comma-separated tag list. Duplicates and order are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
