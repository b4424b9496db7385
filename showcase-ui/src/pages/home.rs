use leptos::form::ActionForm;
use leptos::prelude::*;
use showcase_app::application::visibility;
use showcase_app::domain::{IdeaCard, ShowcaseSnapshot, StartupIdea, Theme};
use showcase_errors::AppError;
use server_fn::ServerFnError;

use crate::components::{
    CardSkeletons, Debounce, FilterInput, IdeaCardView, Notification, StatsBar, Tone,
};

#[server(ListIdeasFn, "/api", endpoint = "list_ideas")]
pub async fn list_ideas() -> Result<ShowcaseSnapshot, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.with_store(|store| store.snapshot())
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(SubmitIdeaFn, "/api", endpoint = "submit_idea")]
pub async fn submit_idea(
    startup_name: String,
    founder_name: String,
    description: String,
    tags: String,
    logo: Option<String>,
    instagram: Option<String>,
    x: Option<String>,
    linkedin: Option<String>,
    youtube: Option<String>,
) -> Result<StartupIdea, ServerFnError> {
    use showcase_app::domain::{IdeaSubmission, SocialPlatform, Socials};
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();

    let socials = Socials::default()
        .with(SocialPlatform::Instagram, instagram)
        .with(SocialPlatform::X, x)
        .with(SocialPlatform::Linkedin, linkedin)
        .with(SocialPlatform::Youtube, youtube);
    let submission = IdeaSubmission::new(startup_name, founder_name, description, tags)
        .with_logo(logo)
        .with_socials(socials);

    ctx.with_store(|store| store.create(submission))
        .and_then(|created| created)
        .map_err(|e| {
            tracing::info!("submit_idea rejected: {}", e);
            ServerFnError::new(e.to_string())
        })
}

#[server(UpvoteIdeaFn, "/api", endpoint = "upvote_idea")]
pub async fn upvote_idea(id: u64) -> Result<u64, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.with_store(|store| store.upvote(id))
        .and_then(|upvoted| upvoted)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(GetThemeFn, "/api", endpoint = "get_theme")]
pub async fn get_theme() -> Result<Theme, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.with_store(|store| store.theme())
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(ToggleThemeFn, "/api", endpoint = "toggle_theme")]
pub async fn toggle_theme() -> Result<Theme, ServerFnError> {
    use showcase_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.with_store(|store| {
        let theme = store.theme().toggled();
        store.set_theme(theme).map(|_| theme)
    })
    .and_then(|toggled| toggled)
    .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Maps a server function failure back to the message a visitor should see.
/// Ignorable failures (a vote on an idea that vanished) yield `None`.
fn visible_error(err: &ServerFnError) -> Option<String> {
    match err {
        ServerFnError::ServerError(msg) => {
            let app_error = msg
                .parse::<AppError>()
                .unwrap_or_else(|_| AppError::Internal(msg.clone()));
            (!app_error.is_ignorable()).then(|| app_error.user_message())
        }
        other => Some(AppError::Internal(other.to_string()).user_message()),
    }
}

/// Banner for the last submission: a confirmation on success, the user-facing
/// message on failure.
fn submit_notice(result: &Result<StartupIdea, ServerFnError>) -> Option<(String, Tone)> {
    match result {
        Ok(_) => Some((
            "Startup idea submitted successfully!".to_string(),
            Tone::Success,
        )),
        Err(e) => visible_error(e).map(|message| (message, Tone::Error)),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let submit = ServerAction::<SubmitIdeaFn>::new();
    let upvote = ServerAction::<UpvoteIdeaFn>::new();

    let snapshot = Resource::new(
        move || (submit.version().get(), upvote.version().get()),
        |_| list_ideas(),
    );

    let filter_text = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let debounce = StoredValue::new(Debounce::default());

    let on_upvote = Callback::new(move |id: u64| {
        upvote.dispatch(UpvoteIdeaFn { id });
    });
    let on_tag = Callback::new(move |tag: String| {
        let mut pending = debounce.get_value();
        pending.cancel();
        debounce.set_value(pending);

        filter_text.set(tag.clone());
        query.set(tag);
    });

    let submit_banner = move || submit.value().get().and_then(|result| submit_notice(&result));
    let upvote_error = move || {
        upvote
            .value()
            .get()
            .and_then(|result| result.err())
            .and_then(|e| visible_error(&e))
    };

    view! {
        <div class="hero">
            <h1 class="hero__title">"Startup Idea Showcase"</h1>
            <p class="hero__subtitle">
                "Pitch your startup, upvote the ones you love, and find ideas by name, founder or tag."
            </p>
        </div>

        <div class="home-layout">
            <div class="home-layout__left">
                <SubmitIdeaForm action=submit/>
                {move || submit_banner().map(|(message, tone)| view! {
                    <Notification
                        message=message
                        tone=tone
                        on_dismiss=Callback::new(move |_: ()| submit.value().set(None))
                    />
                })}
            </div>

            <div class="home-layout__right">
                <FilterInput
                    value=filter_text
                    debounce=debounce
                    on_settled=move |text: String| query.set(text)
                />
                {move || upvote_error().map(|message| view! {
                    <Notification message=message tone=Tone::Error/>
                })}
                <Suspense fallback=move || view! { <CardSkeletons/> }>
                    {move || {
                        snapshot.get().map(|result| match result {
                            Ok(data) => {
                                let flags = visibility(&data.ideas, &query.get());
                                let any_visible = flags.iter().any(|(_, visible)| *visible);
                                let top_id = data.top_id;
                                let cards = data
                                    .ideas
                                    .iter()
                                    .zip(flags)
                                    .map(|(idea, (_, visible))| (IdeaCard::from(idea), visible))
                                    .collect::<Vec<_>>();

                                view! {
                                    <StatsBar stats=data.stats/>
                                    <div class="ideas">
                                        {cards.into_iter().map(|(card, visible)| {
                                            let is_top = Some(card.id) == top_id;
                                            view! {
                                                <div
                                                    class="ideas__slot"
                                                    style:display=if visible { "contents" } else { "none" }
                                                >
                                                    <IdeaCardView
                                                        card=card
                                                        is_top=is_top
                                                        on_upvote=on_upvote
                                                        on_tag=on_tag
                                                    />
                                                </div>
                                            }
                                        }).collect::<Vec<_>>()}
                                    </div>
                                    {(!any_visible).then(|| view! {
                                        <p class="ideas__empty">"No startup ideas match your search."</p>
                                    })}
                                }.into_any()
                            }
                            Err(_) => view! {
                                <p class="ideas__error">"Could not load startup ideas."</p>
                            }.into_any(),
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

/// Submission form. Field names match the `submit_idea` arguments.
#[component]
fn SubmitIdeaForm(action: ServerAction<SubmitIdeaFn>) -> impl IntoView {
    view! {
        <ActionForm action=action attr:class="idea-form">
            <h2 class="idea-form__title">"Submit your idea"</h2>
            <input type="text" name="startup_name" class="idea-form__input" placeholder="Startup Name" required/>
            <input type="text" name="founder_name" class="idea-form__input" placeholder="Founder Name" required/>
            <textarea name="description" class="idea-form__input" placeholder="Description" rows="3" required></textarea>
            <input type="text" name="tags" class="idea-form__input" placeholder="Tags (comma-separated)" required/>
            <input type="text" name="logo" class="idea-form__input" placeholder="Logo (image data URL, optional)"/>
            <input type="url" name="instagram" class="idea-form__input" placeholder="Instagram URL (optional)"/>
            <input type="url" name="x" class="idea-form__input" placeholder="X URL (optional)"/>
            <input type="url" name="linkedin" class="idea-form__input" placeholder="LinkedIn URL (optional)"/>
            <input type="url" name="youtube" class="idea-form__input" placeholder="YouTube URL (optional)"/>
            <button type="submit" class="idea-form__button" prop:disabled=move || action.pending().get()>
                {move || if action.pending().get() { "Submitting..." } else { "Submit Idea" }}
            </button>
        </ActionForm>
    }
}
