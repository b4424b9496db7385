use leptos::prelude::*;

/// Grey placeholder cards while the ideas load.
#[component]
pub fn CardSkeletons(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="ideas" aria-busy="true">
            {(0..count).map(|_| view! {
                <div class="idea-card idea-card--skeleton">
                    <span class="skeleton skeleton--title"></span>
                    <span class="skeleton skeleton--line"></span>
                    <span class="skeleton skeleton--line"></span>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
