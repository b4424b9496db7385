mod card_skeletons;
mod filter_input;
mod idea_card;
mod notification;
mod stats_bar;
mod theme_toggle;

pub use card_skeletons::CardSkeletons;
pub use filter_input::{Debounce, FilterInput};
pub use idea_card::IdeaCardView;
pub use notification::{Notification, Tone};
pub use stats_bar::StatsBar;
pub use theme_toggle::ThemeToggle;
