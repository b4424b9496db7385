use crate::domain::StartupIdea;
use std::time::Duration;

/// Quiet window the UI waits after the last keystroke before re-filtering.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(200);

/// Free-text query, trimmed and lowercased once up front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery(String);

impl FilterQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tags are checked one at a time, never as a joined string.
    pub fn matches(&self, idea: &StartupIdea) -> bool {
        if self.is_empty() {
            return true;
        }

        let needle = self.0.as_str();
        let contains = |text: &str| text.to_lowercase().contains(needle);

        contains(idea.startup_name.as_str())
            || contains(idea.description.as_str())
            || contains(idea.founder_name.as_str())
            || idea.tags.iter().any(|tag| contains(tag.as_str()))
    }
}

/// Ideas matching `query`, in their original order.
pub fn filter<'a, I>(ideas: I, query: &str) -> Vec<&'a StartupIdea>
where
    I: IntoIterator<Item = &'a StartupIdea>,
{
    let query = FilterQuery::new(query);
    ideas.into_iter().filter(|idea| query.matches(idea)).collect()
}

/// Show/hide flag per idea, for hosts that keep every card mounted.
pub fn visibility(ideas: &[StartupIdea], query: &str) -> Vec<(u64, bool)> {
    let query = FilterQuery::new(query);
    ideas.iter().map(|idea| (idea.id, query.matches(idea))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn idea(id: u64, name: &str, founder: &str, description: &str, tags: &[&str]) -> StartupIdea {
        StartupIdea {
            id,
            startup_name: name.to_string(),
            founder_name: founder.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            upvotes: 0,
            timestamp: Utc::now(),
            logo: None,
            socials: Default::default(),
        }
    }

    fn ideas() -> Vec<StartupIdea> {
        vec![
            idea(3, "EcoLearn", "Jamie Chen", "Gamified sustainability", &["education", "environment"]),
            idea(2, "MealMatch", "Priya Singh", "Reduce food waste", &["food", "mobile"]),
            idea(1, "CodeBuddy", "Marcus Johnson", "Debug your code", &["tech", "AI"]),
        ]
    }

    fn ids(found: &[&StartupIdea]) -> Vec<u64> {
        found.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let ideas = ideas();
        assert_eq!(ids(&filter(&ideas, "")), vec![3, 2, 1]);
        assert_eq!(ids(&filter(&ideas, "   ")), vec![3, 2, 1]);
    }

    #[test]
    fn test_matches_name_description_and_founder_case_insensitively() {
        let ideas = ideas();
        assert_eq!(ids(&filter(&ideas, "ecolearn")), vec![3]);
        assert_eq!(ids(&filter(&ideas, "FOOD WASTE")), vec![2]);
        assert_eq!(ids(&filter(&ideas, "  johnson ")), vec![1]);
    }

    #[test]
    fn test_matches_single_tags_only() {
        let ideas = ideas();
        assert_eq!(ids(&filter(&ideas, "ai")), vec![3, 1]);
        assert_eq!(ids(&filter(&ideas, "env")), vec![3]);
        assert!(filter(&ideas, "education,environment").is_empty());
        assert!(filter(&ideas, "tech ai").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let ideas = ideas();
        for query in ["", "a", "code", "mobile", "nothing here"] {
            let once = filter(&ideas, query);
            let twice = filter(once.iter().copied(), query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_collection() {
        let ideas: Vec<StartupIdea> = Vec::new();
        assert!(filter(&ideas, "anything").is_empty());
        assert!(visibility(&ideas, "").is_empty());
    }

    #[test]
    fn test_visibility_flags_every_idea() {
        let ideas = ideas();
        assert_eq!(visibility(&ideas, "singh"), vec![(3, false), (2, true), (1, false)]);
    }
}
