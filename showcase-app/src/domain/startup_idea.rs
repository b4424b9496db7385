use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted pitch. Field names serialize in camelCase so the stored payload
/// stays readable by the browser page that shares the same storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupIdea {
    pub id: u64,
    pub startup_name: String,
    pub founder_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub upvotes: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    X,
    Linkedin,
    Youtube,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Instagram,
        SocialPlatform::X,
        SocialPlatform::Linkedin,
        SocialPlatform::Youtube,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::X => "x",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::X => "X",
            Self::Linkedin => "LinkedIn",
            Self::Youtube => "YouTube",
        }
    }
}

/// Optional profile links, one slot per supported platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl Socials {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        let url = match platform {
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::X => &self.x,
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Youtube => &self.youtube,
        };
        url.as_deref()
    }

    pub fn with(mut self, platform: SocialPlatform, url: Option<String>) -> Self {
        let slot = match platform {
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::X => &mut self.x,
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Youtube => &mut self.youtube,
        };
        *slot = url;
        self
    }

    /// Drops blank entries and trims the rest.
    pub fn normalized(self) -> Self {
        SocialPlatform::ALL
            .iter()
            .fold(Socials::default(), |acc, &platform| {
                let url = self.get(platform).and_then(non_blank);
                acc.with(platform, url)
            })
    }

    pub fn is_empty(&self) -> bool {
        SocialPlatform::ALL.iter().all(|p| self.get(*p).is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|url| (p, url)))
    }
}

pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_browser_payload_without_optional_fields() {
        let json = r#"{
            "id": 3,
            "startupName": "CodeBuddy",
            "founderName": "Marcus Johnson",
            "description": "AI-powered programming assistant",
            "tags": ["tech", "education", "AI"],
            "upvotes": 18,
            "timestamp": "2024-05-01T10:15:30.000Z"
        }"#;

        let idea: StartupIdea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.id, 3);
        assert_eq!(idea.startup_name, "CodeBuddy");
        assert_eq!(idea.tags, vec!["tech", "education", "AI"]);
        assert!(idea.logo.is_none());
        assert!(idea.socials.is_empty());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_empty_socials() {
        let idea = StartupIdea {
            id: 1,
            startup_name: "EcoLearn".to_string(),
            founder_name: "Jamie Chen".to_string(),
            description: "Gamified sustainability".to_string(),
            tags: vec![],
            upvotes: 0,
            timestamp: Utc::now(),
            logo: None,
            socials: Socials::default(),
        };

        let value = serde_json::to_value(&idea).unwrap();
        assert!(value.get("startupName").is_some());
        assert!(value.get("founderName").is_some());
        assert!(value.get("socials").is_none());
        assert!(value.get("logo").is_none());
    }

    #[test]
    fn test_socials_normalized_drops_blank_urls() {
        let socials = Socials::default()
            .with(SocialPlatform::Instagram, Some("  ".to_string()))
            .with(SocialPlatform::X, Some(" https://x.com/ecolearn ".to_string()))
            .normalized();

        assert_eq!(socials.instagram, None);
        assert_eq!(socials.x.as_deref(), Some("https://x.com/ecolearn"));
        assert_eq!(
            socials.iter().collect::<Vec<_>>(),
            vec![(SocialPlatform::X, "https://x.com/ecolearn")]
        );
    }
}
