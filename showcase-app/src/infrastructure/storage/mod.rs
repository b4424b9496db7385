mod memory;

#[cfg(feature = "ssr")]
mod file;

pub use memory::MemoryStorage;

#[cfg(feature = "ssr")]
pub use file::FileStorage;

use showcase_errors::AppError;

/// Key holding the JSON array of ideas.
pub const IDEAS_KEY: &str = "startupIdeas";
/// Key holding the `enabled`/`disabled` dark-mode flag.
pub const THEME_KEY: &str = "darkMode";

/// Synchronous string key-value storage, the shape of the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}
