mod rest;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use showcase_app::AppContext;
use showcase_ui::pages::{GetThemeFn, ListIdeasFn, SubmitIdeaFn, ToggleThemeFn, UpvoteIdeaFn};
use showcase_ui::App;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to open idea store: {}", e);
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<ListIdeasFn>();
    server_fn::axum::register_explicit::<SubmitIdeaFn>();
    server_fn::axum::register_explicit::<UpvoteIdeaFn>();
    server_fn::axum::register_explicit::<GetThemeFn>();
    server_fn::axum::register_explicit::<ToggleThemeFn>();
    tracing::info!("Registered server functions");

    let app = Router::new()
        .route("/api/{*fn_name}", axum::routing::post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .nest("/rest", rest::rest_routes(app_context.clone()))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #faf4ed;
            --surface: #fffaf3;
            --overlay: #f2e9e1;
            --muted: #9893a5;
            --subtle: #797593;
            --text: #575279;
            --love: #b4637a;
            --gold: #ea9d34;
            --pine: #286983;
            --foam: #56949f;
        }
        .theme-dark {
            --base: #191724;
            --surface: #1f1d2e;
            --overlay: #26233a;
            --muted: #6e6a86;
            --subtle: #908caa;
            --text: #e0def4;
            --love: #eb6f92;
            --gold: #f6c177;
            --pine: #31748f;
            --foam: #9ccfd8;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: 'Inter', -apple-system, sans-serif; min-height: 100vh; }
        .container { background: var(--base); color: var(--text); min-height: 100vh; padding: 1.5rem; }
        .topbar { display: flex; justify-content: space-between; align-items: center; max-width: 1100px; margin: 0 auto; }
        .topbar__brand { font-weight: 800; color: var(--love); }
        .theme-toggle { padding: 0.4rem 0.9rem; border-radius: 999px; border: 1px solid var(--overlay); background: var(--surface); color: var(--text); cursor: pointer; }
        .hero { text-align: center; padding: 3rem 0 2rem; }
        .hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--love); font-weight: 800; margin-bottom: 0.75rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
        .home-layout { display: grid; gap: 2rem; max-width: 1100px; margin: 0 auto; }
        @media (min-width: 900px) { .home-layout { grid-template-columns: 340px 1fr; } }
        .idea-form { display: flex; flex-direction: column; gap: 0.75rem; background: var(--surface); padding: 1.25rem; border-radius: 12px; }
        .idea-form__title { color: var(--pine); font-size: 1.2rem; }
        .idea-form__input { padding: 0.7rem 0.9rem; border: 2px solid var(--overlay); border-radius: 8px; background: var(--base); color: var(--text); font: inherit; }
        .idea-form__button { padding: 0.8rem 1.2rem; background: var(--love); color: var(--base); border: none; border-radius: 8px; font-weight: 700; cursor: pointer; }
        .idea-form__button:disabled { opacity: 0.6; cursor: wait; }
        .filter__input { width: 100%; padding: 0.8rem 1rem; border: 2px solid var(--overlay); border-radius: 8px; background: var(--surface); color: var(--text); font: inherit; }
        .stats { display: flex; gap: 2rem; margin: 1.25rem 0; }
        .stats__value { font-size: 1.6rem; font-weight: 800; color: var(--gold); margin-right: 0.4rem; }
        .stats__label { color: var(--subtle); }
        .ideas { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); }
        .ideas__empty, .ideas__error { color: var(--muted); text-align: center; padding: 2rem 0; }
        .idea-card { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; padding: 1.25rem; display: flex; flex-direction: column; gap: 0.6rem; }
        .idea-card__header { display: flex; align-items: center; gap: 0.6rem; flex-wrap: wrap; }
        .idea-card__logo { width: 40px; height: 40px; border-radius: 8px; object-fit: cover; }
        .idea-card__name { font-size: 1.2rem; }
        .idea-card__badge { font-size: 0.75rem; background: var(--gold); color: var(--base); padding: 0.1rem 0.5rem; border-radius: 999px; }
        .idea-card__description { color: var(--subtle); }
        .idea-card__founder { font-size: 0.9rem; color: var(--subtle); }
        .idea-card__tags { display: flex; flex-wrap: wrap; gap: 0.4rem; }
        .idea-card__tag { font-size: 0.8rem; padding: 0.15rem 0.6rem; border-radius: 999px; border: none; background: var(--overlay); color: var(--pine); cursor: pointer; }
        .idea-card__socials { list-style: none; display: flex; gap: 0.75rem; font-size: 0.85rem; }
        .idea-card__social { color: var(--foam); }
        .idea-card__footer { display: flex; justify-content: space-between; align-items: center; margin-top: auto; }
        .idea-card__upvote { padding: 0.3rem 0.9rem; border-radius: 8px; border: 1px solid var(--pine); background: transparent; color: var(--pine); cursor: pointer; }
        .idea-card__date { font-size: 0.8rem; color: var(--muted); }
        .idea-card--skeleton { min-height: 140px; }
        .skeleton { display: block; background: var(--overlay); border-radius: 6px; animation: pulse 1.2s ease-in-out infinite; }
        .skeleton--title { height: 1.2rem; width: 60%; }
        .skeleton--line { height: 0.8rem; width: 90%; }
        @keyframes pulse { 50% { opacity: 0.4; } }
        .notice { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; border-radius: 8px; padding: 0.9rem 1.1rem; margin: 1rem 0; border-left: 4px solid; background: var(--surface); }
        .notice--success { border-color: var(--pine); color: var(--pine); }
        .notice--error { border-color: var(--love); color: var(--love); }
        .notice__close { background: none; border: none; color: inherit; font-size: 1.2rem; cursor: pointer; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Startup Idea Showcase"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🚀</text></svg>"/>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
