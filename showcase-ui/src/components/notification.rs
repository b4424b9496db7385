use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Success => "notice notice--success",
            Tone::Error => "notice notice--error",
        }
    }
}

/// Banner shown after a submission, or when an action fails.
#[component]
pub fn Notification(
    #[prop(into)] message: String,
    tone: Tone,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let role = match tone {
        Tone::Success => "status",
        Tone::Error => "alert",
    };

    view! {
        <div class=tone.class() role=role>
            <p class="notice__message">{message}</p>
            {on_dismiss.map(|dismiss| view! {
                <button
                    type="button"
                    class="notice__close"
                    aria-label="Dismiss"
                    on:click=move |_| dismiss.run(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}
