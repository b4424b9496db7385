use leptos::prelude::*;
use showcase_app::application::FILTER_DEBOUNCE;

/// Tickets for pending filter timers. Only the newest ticket may apply its
/// text; typing again or picking a tag retires every older one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Search box. `value` follows every keystroke, `on_settled` fires once the
/// input has been quiet for the debounce window.
#[component]
pub fn FilterInput(
    value: RwSignal<String>,
    debounce: StoredValue<Debounce>,
    #[prop(into)] on_settled: Callback<String>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        value.set(text.clone());

        let mut pending = debounce.get_value();
        let ticket = pending.schedule();
        debounce.set_value(pending);

        set_timeout(
            move || {
                if debounce.get_value().is_current(ticket) {
                    on_settled.run(text);
                }
            },
            FILTER_DEBOUNCE,
        );
    };

    view! {
        <div class="filter">
            <input
                type="search"
                class="filter__input"
                placeholder="Search by name, founder, description or tag..."
                prop:value=move || value.get()
                on:input=on_input
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut debounce = Debounce::default();
        let first = debounce.schedule();
        let second = debounce.schedule();

        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }

    #[test]
    fn test_cancel_retires_pending_ticket() {
        let mut debounce = Debounce::default();
        let typed = debounce.schedule();

        // a tag click lands inside the quiet window
        debounce.cancel();

        assert!(!debounce.is_current(typed));
        let next = debounce.schedule();
        assert!(debounce.is_current(next));
    }
}
