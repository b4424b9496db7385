use serde::{Deserialize, Serialize};

use super::startup_idea::{SocialPlatform, StartupIdea};

const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub label: String,
    pub url: String,
}

/// What a card in the idea grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaCard {
    pub id: u64,
    pub startup_name: String,
    pub founder_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub upvotes: u64,
    pub posted_on: String,
    pub logo: Option<String>,
    pub socials: Vec<SocialLink>,
}

impl From<&StartupIdea> for IdeaCard {
    fn from(idea: &StartupIdea) -> Self {
        Self {
            id: idea.id,
            startup_name: idea.startup_name.clone(),
            founder_name: idea.founder_name.clone(),
            description: idea.description.clone(),
            tags: idea.tags.clone(),
            upvotes: idea.upvotes,
            posted_on: idea.timestamp.format(DISPLAY_DATE_FORMAT).to_string(),
            logo: idea.logo.clone(),
            socials: idea
                .socials
                .iter()
                .map(|(platform, url)| SocialLink {
                    platform,
                    label: platform.label().to_string(),
                    url: url.to_string(),
                })
                .collect(),
        }
    }
}
