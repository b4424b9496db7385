use leptos::prelude::*;
use showcase_app::domain::Theme;

#[component]
pub fn ThemeToggle(
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=move |_| on_toggle.run(())
        >
            {move || match theme.get() {
                Theme::Dark => "Light mode",
                Theme::Light => "Dark mode",
            }}
        </button>
    }
}
