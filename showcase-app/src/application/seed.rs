use crate::domain::IdeaSubmission;

/// Pitches shown on a fresh install, with their starting vote counts.
pub fn sample_ideas() -> Vec<(IdeaSubmission, u64)> {
    vec![
        (
            IdeaSubmission::new(
                "EcoLearn",
                "Jamie Chen",
                "An interactive platform that teaches environmental sustainability through gamified learning experiences.",
                "education, environment, tech",
            ),
            15,
        ),
        (
            IdeaSubmission::new(
                "MealMatch",
                "Priya Singh",
                "An app that reduces food waste by connecting restaurants with surplus food to students on a budget.",
                "food, sustainability, mobile",
            ),
            23,
        ),
        (
            IdeaSubmission::new(
                "CodeBuddy",
                "Marcus Johnson",
                "AI-powered programming assistant that helps students debug their code and learn programming concepts.",
                "tech, education, AI",
            ),
            18,
        ),
    ]
}
