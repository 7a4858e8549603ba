//! One-time hint overlay explaining a screen.
//!
//! Completion is persisted through the tour store, so a dismissed hint stays
//! dismissed across reloads. The overlay waits for mount because completion
//! flags live in browser storage.

use leptos::prelude::*;

use crate::state::session::Tours;

#[component]
pub fn TourHint(tour: &'static str, #[prop(into)] title: String, #[prop(into)] body: String) -> impl IntoView {
    let tours = expect_context::<RwSignal<Tours>>();
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let visible = move || mounted.get() && !tours.with(|t| t.is_completed(tour));
    let on_dismiss = move |_| tours.update(|t| t.complete(tour));

    view! {
        <Show when=visible>
            <div class="tour-hint" role="dialog" aria-label="Tip">
                <h3 class="tour-hint__title">{title.clone()}</h3>
                <p class="tour-hint__body">{body.clone()}</p>
                <button class="tour-hint__dismiss" type="button" on:click=on_dismiss>
                    "Got it"
                </button>
            </div>
        </Show>
    }
}
