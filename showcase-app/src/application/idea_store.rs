use crate::domain::{
    IdeaDraft, IdeaSubmission, ShowcaseSnapshot, ShowcaseStats, StartupIdea, Theme,
};
use crate::infrastructure::storage::{KeyValueStore, IDEAS_KEY, THEME_KEY};
use chrono::Utc;
use showcase_errors::AppError;

/// Owns the ideas collection and is the only place it is mutated.
///
/// Every mutation rewrites the whole collection to storage before returning.
/// A failed write is logged and the in-memory state is kept as is.
pub struct IdeaStore<S> {
    storage: S,
    ideas: Vec<StartupIdea>,
    next_id: u64,
}

impl<S: KeyValueStore> IdeaStore<S> {
    /// Loads whatever was persisted. A missing or unreadable payload starts empty,
    /// and so does one whose highest id leaves no room for another.
    pub fn initialize(mut storage: S) -> Self {
        let mut ideas = load_ideas(&storage);
        let max_id = ideas.iter().map(|idea| idea.id).max();
        let next_id = match max_id {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| {
                tracing::warn!("Stored ideas exhaust the id space, starting empty");
                ideas.clear();
                1
            }),
        };

        if let Ok(None) = storage.get(THEME_KEY) {
            if let Err(e) = storage.set(THEME_KEY, Theme::default().as_flag()) {
                tracing::warn!("Cannot store default theme flag: {}", e);
            }
        }

        tracing::info!("Loaded {} startup ideas, next id {}", ideas.len(), next_id);

        Self {
            storage,
            ideas,
            next_id,
        }
    }

    pub fn create(&mut self, submission: IdeaSubmission) -> Result<StartupIdea, AppError> {
        let draft = IdeaDraft::try_from(submission)?;

        let idea = StartupIdea {
            id: self.allocate_id()?,
            startup_name: draft.startup_name,
            founder_name: draft.founder_name,
            description: draft.description,
            tags: draft.tags,
            upvotes: 0,
            timestamp: Utc::now(),
            logo: draft.logo,
            socials: draft.socials,
        };

        self.ideas.insert(0, idea.clone());
        self.persist();

        tracing::info!("Created startup idea {} ({})", idea.id, idea.startup_name);
        Ok(idea)
    }

    /// Adds one vote and returns the new count. A count already at the limit is
    /// left untouched and reported instead of wrapping.
    pub fn upvote(&mut self, id: u64) -> Result<u64, AppError> {
        let idea = self
            .ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or(AppError::NotFound(id))?;

        let upvotes = idea
            .upvotes
            .checked_add(1)
            .ok_or_else(|| AppError::Internal(format!("upvote limit reached for idea {id}")))?;
        idea.upvotes = upvotes;
        self.persist();

        Ok(upvotes)
    }

    pub fn list(&self) -> &[StartupIdea] {
        &self.ideas
    }

    pub fn get_by_id(&self, id: u64) -> Option<&StartupIdea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    /// Saturates instead of overflowing.
    pub fn total_upvotes(&self) -> u64 {
        self.ideas
            .iter()
            .fold(0u64, |total, idea| total.saturating_add(idea.upvotes))
    }

    /// First idea holding the highest vote count.
    pub fn highest_upvoted(&self) -> Option<&StartupIdea> {
        self.ideas.iter().fold(None, |best: Option<&StartupIdea>, idea| match best {
            Some(current) if current.upvotes >= idea.upvotes => Some(current),
            _ => Some(idea),
        })
    }

    pub fn stats(&self) -> ShowcaseStats {
        ShowcaseStats {
            startups: self.ideas.len(),
            upvotes: self.total_upvotes(),
        }
    }

    pub fn snapshot(&self) -> ShowcaseSnapshot {
        ShowcaseSnapshot {
            ideas: self.ideas.clone(),
            stats: self.stats(),
            top_id: self.highest_upvoted().map(|idea| idea.id),
        }
    }

    /// Appends the given ideas when the collection is empty, then persists once.
    /// Returns how many were inserted.
    pub fn seed_if_empty(&mut self, samples: Vec<(IdeaSubmission, u64)>) -> Result<usize, AppError> {
        if !self.ideas.is_empty() {
            return Ok(0);
        }

        let drafts = samples
            .into_iter()
            .map(|(submission, upvotes)| IdeaDraft::try_from(submission).map(|d| (d, upvotes)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seeded = Vec::with_capacity(drafts.len());
        for (draft, upvotes) in drafts {
            seeded.push(StartupIdea {
                id: self.allocate_id()?,
                startup_name: draft.startup_name,
                founder_name: draft.founder_name,
                description: draft.description,
                tags: draft.tags,
                upvotes,
                timestamp: Utc::now(),
                logo: draft.logo,
                socials: draft.socials,
            });
        }

        let count = seeded.len();
        self.ideas.extend(seeded);
        self.persist();

        tracing::info!("Seeded {} sample startup ideas", count);
        Ok(count)
    }

    pub fn theme(&self) -> Theme {
        match self.storage.get(THEME_KEY) {
            Ok(flag) => Theme::from_flag(flag.as_deref()),
            Err(e) => {
                tracing::warn!("Cannot read theme flag, using default: {}", e);
                Theme::default()
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.storage.set(THEME_KEY, theme.as_flag())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// `u64::MAX` is never handed out, so `next_id` always stays representable.
    fn allocate_id(&mut self) -> Result<u64, AppError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("startup idea ids exhausted".to_string()))?;
        Ok(id)
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.ideas)
            .map_err(|e| AppError::Storage(e.to_string()))
            .and_then(|payload| self.storage.set(IDEAS_KEY, &payload));

        if let Err(e) = result {
            tracing::error!("Failed to persist startup ideas: {}", e);
        }
    }
}

fn load_ideas<S: KeyValueStore>(storage: &S) -> Vec<StartupIdea> {
    let payload = match storage.get(IDEAS_KEY) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Cannot read stored ideas, starting empty: {}", e);
            return Vec::new();
        }
    };

    serde_json::from_str(&payload).unwrap_or_else(|e| {
        tracing::warn!("Stored ideas are malformed, starting empty: {}", e);
        Vec::new()
    })
}
