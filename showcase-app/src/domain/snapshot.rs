use serde::{Deserialize, Serialize};

use super::startup_idea::StartupIdea;

/// Hero counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseStats {
    pub startups: usize,
    pub upvotes: u64,
}

/// Everything the page needs from the store in one read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseSnapshot {
    pub ideas: Vec<StartupIdea>,
    pub stats: ShowcaseStats,
    pub top_id: Option<u64>,
}
