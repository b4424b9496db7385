use leptos::prelude::*;
use showcase_app::domain::IdeaCard;

#[component]
pub fn IdeaCardView(
    card: IdeaCard,
    #[prop(optional)] is_top: bool,
    #[prop(into)] on_upvote: Callback<u64>,
    #[prop(into)] on_tag: Callback<String>,
) -> impl IntoView {
    let id = card.id;

    view! {
        <article class="idea-card" id=format!("startup-{}", card.id)>
            <header class="idea-card__header">
                {card.logo.map(|src| view! {
                    <img class="idea-card__logo" src=src alt="Startup logo"/>
                })}
                <h3 class="idea-card__name">{card.startup_name}</h3>
                {is_top.then(|| view! { <span class="idea-card__badge">"Most upvoted"</span> })}
            </header>
            <p class="idea-card__description">{card.description}</p>
            <p class="idea-card__founder">"Founder: " {card.founder_name}</p>
            <div class="idea-card__tags">
                {card.tags.into_iter().map(|tag| {
                    let query = tag.clone();
                    view! {
                        <button
                            type="button"
                            class="idea-card__tag"
                            on:click=move |_| on_tag.run(query.clone())
                        >
                            {tag}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
            <ul class="idea-card__socials">
                {card.socials.into_iter().map(|link| view! {
                    <li>
                        <a href=link.url target="_blank" rel="noopener noreferrer" class="idea-card__social">
                            {link.label}
                        </a>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
            <footer class="idea-card__footer">
                <button
                    type="button"
                    class="idea-card__upvote"
                    on:click=move |_| on_upvote.run(id)
                >
                    "▲ " {card.upvotes}
                </button>
                <span class="idea-card__date">{card.posted_on}</span>
            </footer>
        </article>
    }
}
