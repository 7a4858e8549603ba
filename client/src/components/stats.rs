//! Daily calorie and macro targets card.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;
use session::targets::DailyTargets;

/// One labelled figure on the stats card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
}

/// Rows shown on the card, calories first.
pub fn stat_rows(targets: &DailyTargets) -> Vec<StatRow> {
    vec![
        StatRow { label: "Calories", value: format!("{} kcal", targets.calories) },
        StatRow { label: "Protein", value: format!("{} g", targets.protein_g) },
        StatRow { label: "Carbs", value: format!("{} g", targets.carbs_g) },
        StatRow { label: "Fat", value: format!("{} g", targets.fat_g) },
    ]
}

/// Footnote explaining where the calorie figure comes from.
pub fn energy_note(targets: &DailyTargets) -> String {
    format!("BMR {} kcal · maintenance {} kcal", targets.bmr, targets.tdee)
}

#[component]
pub fn DailyStats(targets: DailyTargets) -> impl IntoView {
    let rows = stat_rows(&targets)
        .into_iter()
        .map(|row| {
            view! {
                <li class="stats__row">
                    <span class="stats__label">{row.label}</span>
                    <span class="stats__value">{row.value}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="card stats" data-tour="stats">
            <h2 class="card__title">"Today's targets"</h2>
            <ul class="stats__list">{rows}</ul>
            <p class="stats__note">{energy_note(&targets)}</p>
        </section>
    }
}
