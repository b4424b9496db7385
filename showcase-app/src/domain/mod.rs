mod idea_card;
mod snapshot;
mod startup_idea;
mod submission;
mod theme;

pub use idea_card::{IdeaCard, SocialLink};
pub use snapshot::{ShowcaseSnapshot, ShowcaseStats};
pub use startup_idea::{SocialPlatform, Socials, StartupIdea};
pub use submission::{parse_tags, IdeaDraft, IdeaSubmission};
pub use theme::Theme;
