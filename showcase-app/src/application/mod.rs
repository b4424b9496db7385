mod filter;
mod idea_store;
mod seed;

pub use filter::{filter, visibility, FilterQuery, FILTER_DEBOUNCE};
pub use idea_store::IdeaStore;
pub use seed::sample_ideas;
