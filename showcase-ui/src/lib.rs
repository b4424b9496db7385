pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use components::ThemeToggle;
use pages::{get_theme, HomePage, ToggleThemeFn};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toggle = ServerAction::<ToggleThemeFn>::new();
    let stored_theme = Resource::new(move || toggle.version().get(), |_| get_theme());
    let theme = Signal::derive(move || {
        stored_theme
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    view! {
        <Title text="Startup Idea Showcase"/>
        <Meta name="description" content="Submit, upvote and discover startup ideas"/>
        <Stylesheet id="leptos" href="/pkg/startup-showcase.css"/>

        <Router>
            <main class=move || format!("container {}", theme.get().css_class())>
                <nav class="topbar">
                    <span class="topbar__brand">"Startup Showcase"</span>
                    <ThemeToggle
                        theme=theme
                        on_toggle=move |_: ()| {
                            toggle.dispatch(ToggleThemeFn {});
                        }
                    />
                </nav>
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
