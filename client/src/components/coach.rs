//! Coach advice card built from the user's profile.

use leptos::prelude::*;
use session::targets::coach_tips;
use session::types::Profile;

#[component]
pub fn CoachCard(profile: Profile) -> impl IntoView {
    let tips = coach_tips(&profile)
        .into_iter()
        .map(|tip| view! { <li class="coach__tip">{tip}</li> })
        .collect_view();

    view! {
        <section class="card coach" data-tour="coach">
            <h2 class="card__title">"Coach says"</h2>
            <ul class="coach__list">{tips}</ul>
        </section>
    }
}
