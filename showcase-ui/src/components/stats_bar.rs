use leptos::prelude::*;
use showcase_app::domain::ShowcaseStats;

#[component]
pub fn StatsBar(stats: ShowcaseStats) -> impl IntoView {
    view! {
        <div class="stats">
            <div class="stats__item">
                <span class="stats__value">{stats.startups}</span>
                <span class="stats__label">"Startups"</span>
            </div>
            <div class="stats__item">
                <span class="stats__value">{stats.upvotes}</span>
                <span class="stats__label">"Upvotes"</span>
            </div>
        </div>
    }
}
