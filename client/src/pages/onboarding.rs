//! Three-screen onboarding wizard that creates the user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft lives in an app-level `RwSignal<OnboardingDraft>`, so moving
//! between screens never loses answers. Screen 1 collects body metrics,
//! screen 2 activity and goal, screen 3 optional food preferences. Only the
//! final submit validates the whole draft; "Next" checks the current screen.
//!
//! On success the session's profile flag is committed before navigating, so
//! the profile guard on the dashboard renders without another fetch.
//!
//! A user who already has a profile lands here from "Edit profile". An
//! untouched draft is then seeded from the cached profile and submitting
//! updates that profile instead of creating a second one.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use session::NutritionApi;
use session::cache::QueryKey;
use session::onboarding::{OnboardingDraft, RequiredField, Step1, Step2, Step3Update, Step4Update, TOTAL_STEPS, parse_list};
use session::types::{ActivityLevel, DietType, Gender, Goal, Profile};

use crate::state::session::{Session, fetch_query};
use crate::state::toast::ToastState;

const AGE_RANGE: (u32, u32) = (13, 120);
const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);

fn parse_age(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|age| (AGE_RANGE.0..=AGE_RANGE.1).contains(age))
}

/// Parse a positive measurement inside `range`. Accepts a decimal comma.
fn parse_measure(raw: &str, range: (f64, f64)) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= range.0 && *v <= range.1)
}

/// Wire name of an enum variant, used as the `<option>` value.
fn option_value<T: Serialize>(value: T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

fn parse_choice<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_owned())).ok()
}

fn field_label(field: RequiredField) -> &'static str {
    match field {
        RequiredField::Age => "age",
        RequiredField::Gender => "gender",
        RequiredField::HeightCm => "height",
        RequiredField::WeightKg => "weight",
        RequiredField::ActivityLevel => "activity level",
        RequiredField::Goal => "goal",
    }
}

fn missing_message(fields: &[RequiredField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| field_label(*f)).collect();
    format!("Please fill in: {}.", labels.join(", "))
}

/// Draft to switch to when an untouched draft meets a cached profile.
fn seeded_draft(current: &OnboardingDraft, cached: Option<&Profile>) -> Option<OnboardingDraft> {
    cached.filter(|_| current.is_pristine()).map(OnboardingDraft::from_profile)
}

fn step_title(step: u8) -> &'static str {
    match step {
        1 => "About you",
        2 => "Activity and goal",
        _ => "Food preferences",
    }
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let draft = expect_context::<RwSignal<OnboardingDraft>>();
    let session = expect_context::<RwSignal<Session>>();
    let cache = expect_context::<RwSignal<session::cache::QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    on_cleanup(move || draft.update(OnboardingDraft::reset));

    Effect::new(move || {
        if session.with_untracked(|s| s.state().has_profile == Some(true)) {
            fetch_query(cache, QueryKey::Profile, |api| async move { api.profile().await });
        }
    });
    Effect::new(move || {
        let cached = cache.with(|c| c.peek::<Profile>(QueryKey::Profile));
        if let Some(seeded) = draft.with_untracked(|d| seeded_draft(d, cached.as_ref())) {
            draft.set(seeded);
        }
    });

    let step = move || draft.with(OnboardingDraft::current_step);

    let on_next = move |_| {
        let missing = draft.with(|d| d.missing_on_step(d.current_step()));
        if missing.is_empty() {
            info.set(String::new());
            draft.update(OnboardingDraft::next_step);
        } else {
            info.set(missing_message(&missing));
        }
    };
    let on_back = move |_| {
        info.set(String::new());
        draft.update(OnboardingDraft::prev_step);
    };
    let on_skip = move |_| {
        let missing = draft.with(|d| d.missing_on_step(d.current_step()));
        if missing.is_empty() {
            info.set(String::new());
            draft.update(OnboardingDraft::skip_to_end);
        } else {
            info.set(missing_message(&missing));
        }
    };

    let on_submit = move |_| {
        if busy.get() {
            return;
        }
        let snapshot = draft.get();
        if let Err(missing) = snapshot.validate() {
            info.set(missing_message(&missing.0));
            draft.update(|d| d.set_step(missing.first_step()));
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::new();
                match session::flows::submit_profile(&api, &snapshot).await {
                    Ok(profile) => {
                        let edited = snapshot.is_editing();
                        log::info!("profile {} saved (edit: {edited})", profile.id);
                        session.update(|s| s.set_profile_status(true));
                        cache.update(|c| {
                            c.invalidate(QueryKey::ProfileSummary);
                            c.put(QueryKey::Profile, &profile, crate::util::browser::now_ms());
                        });
                        toasts.update(|t| {
                            t.success(if edited {
                                "Profile updated. Your targets are recalculated."
                            } else {
                                "Profile saved. Here are your daily targets."
                            });
                        });
                        busy.set(false);
                        navigate(session::routes::DASHBOARD, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("profile submission failed: {e}");
                        let message = e.user_message();
                        toasts.update(|t| {
                            t.error(message.clone());
                        });
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (snapshot, session, cache, toasts, &navigate);
        }
    };

    view! {
        <div class="onboarding-page">
            <div class="onboarding-card">
                <p class="onboarding-card__progress">
                    {move || format!("Step {} of {TOTAL_STEPS}", step())}
                </p>
                <h1 class="onboarding-card__title">{move || step_title(step())}</h1>
                {move || match step() {
                    1 => view! { <BodyStep draft=draft/> }.into_any(),
                    2 => view! { <GoalStep draft=draft/> }.into_any(),
                    _ => view! { <PreferencesStep draft=draft/> }.into_any(),
                }}
                <Show when=move || !info.get().is_empty()>
                    <p class="onboarding-card__message">{move || info.get()}</p>
                </Show>
                <div class="onboarding-card__actions">
                    <Show when=move || { step() > 1 }>
                        <button class="onboarding-button onboarding-button--secondary" type="button" on:click=on_back>
                            "Back"
                        </button>
                    </Show>
                    <Show when=move || { step() == 2 }>
                        <button class="onboarding-button onboarding-button--secondary" type="button" on:click=on_skip>
                            "Skip preferences"
                        </button>
                    </Show>
                    <Show
                        when=move || draft.with(OnboardingDraft::is_last_step)
                        fallback=move || {
                            view! {
                                <button class="onboarding-button" type="button" on:click=on_next>
                                    "Next"
                                </button>
                            }
                        }
                    >
                        <button
                            class="onboarding-button"
                            type="button"
                            disabled=move || busy.get()
                            on:click=on_submit.clone()
                        >
                            {move || if busy.get() { "Saving..." } else { "Finish" }}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BodyStep(draft: RwSignal<OnboardingDraft>) -> impl IntoView {
    let initial = draft.with_untracked(|d| d.step1.clone());
    let gender_options = Gender::ALL
        .into_iter()
        .map(|g| {
            let value = option_value(g);
            let selected = initial.gender == Some(g);
            view! { <option value=value selected=selected>{g.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="onboarding-step">
            <label class="onboarding-field">
                <span>"Age"</span>
                <input
                    type="number"
                    min="13"
                    max="120"
                    prop:value=initial.age.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| draft.update(|d| d.step1.age = parse_age(&event_target_value(&ev)))
                />
            </label>
            <label class="onboarding-field">
                <span>"Gender"</span>
                <select on:change=move |ev| {
                    let gender = parse_choice::<Gender>(&event_target_value(&ev));
                    draft.update(|d| d.update_step1(Step1 { gender, ..Step1::default() }));
                }>
                    <option value="" disabled=true selected=initial.gender.is_none()>"Select"</option>
                    {gender_options}
                </select>
            </label>
            <label class="onboarding-field">
                <span>"Height (cm)"</span>
                <input
                    type="number"
                    step="0.1"
                    prop:value=initial.height_cm.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        draft.update(|d| d.step1.height_cm = parse_measure(&event_target_value(&ev), HEIGHT_RANGE_CM));
                    }
                />
            </label>
            <label class="onboarding-field">
                <span>"Weight (kg)"</span>
                <input
                    type="number"
                    step="0.1"
                    prop:value=initial.weight_kg.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        draft.update(|d| d.step1.weight_kg = parse_measure(&event_target_value(&ev), WEIGHT_RANGE_KG));
                    }
                />
            </label>
        </div>
    }
}

#[component]
fn GoalStep(draft: RwSignal<OnboardingDraft>) -> impl IntoView {
    let activity_options = ActivityLevel::ALL
        .into_iter()
        .map(|level| {
            let checked = move || draft.with(|d| d.step2.activity_level == Some(level));
            view! {
                <label class="onboarding-choice">
                    <input
                        type="radio"
                        name="activity_level"
                        value=option_value(level)
                        prop:checked=checked
                        on:change=move |_| {
                            draft.update(|d| d.update_step2(Step2 { activity_level: Some(level), goal: None }));
                        }
                    />
                    <span>{level.label()}</span>
                </label>
            }
        })
        .collect_view();
    let goal_options = Goal::ALL
        .into_iter()
        .map(|goal| {
            let checked = move || draft.with(|d| d.step2.goal == Some(goal));
            view! {
                <label class="onboarding-choice">
                    <input
                        type="radio"
                        name="goal"
                        value=option_value(goal)
                        prop:checked=checked
                        on:change=move |_| draft.update(|d| d.update_step2(Step2 { activity_level: None, goal: Some(goal) }))
                    />
                    <span>{goal.label()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="onboarding-step">
            <fieldset class="onboarding-group">
                <legend>"How active are you?"</legend>
                {activity_options}
            </fieldset>
            <fieldset class="onboarding-group">
                <legend>"What is your goal?"</legend>
                {goal_options}
            </fieldset>
        </div>
    }
}

#[component]
fn PreferencesStep(draft: RwSignal<OnboardingDraft>) -> impl IntoView {
    view! {
        <Show
            when=move || !draft.with(OnboardingDraft::skipped_optional)
            fallback=|| {
                view! {
                    <p class="onboarding-step__note">
                        "Default preferences will be used. You can change them later from the dashboard."
                    </p>
                }
            }
        >
            <PreferenceFields draft=draft/>
        </Show>
    }
}

#[component]
fn PreferenceFields(draft: RwSignal<OnboardingDraft>) -> impl IntoView {
    let (step3, step4) = draft.with_untracked(|d| (d.step3.clone(), d.step4.clone()));
    let diet_options = DietType::ALL
        .into_iter()
        .map(|diet| {
            let selected = step3.diet_type == diet;
            view! { <option value=option_value(diet) selected=selected>{diet.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="onboarding-step">
            <label class="onboarding-field">
                <span>"Diet"</span>
                <select on:change=move |ev| {
                    let diet_type = parse_choice::<DietType>(&event_target_value(&ev));
                    draft.update(|d| d.update_step3(Step3Update { diet_type, ..Step3Update::default() }));
                }>
                    {diet_options}
                </select>
            </label>
            <ListField
                label="Allergies"
                initial=step3.allergies.join(", ")
                on_change=Callback::new(move |items: Vec<String>| {
                    draft.update(|d| d.update_step3(Step3Update { allergies: Some(items), ..Step3Update::default() }));
                })
            />
            <ListField
                label="Foods you dislike"
                initial=step3.disliked_foods.join(", ")
                on_change=Callback::new(move |items: Vec<String>| {
                    draft.update(|d| {
                        d.update_step3(Step3Update { disliked_foods: Some(items), ..Step3Update::default() });
                    });
                })
            />
            <ListField
                label="Health conditions"
                initial=step4.health_conditions.join(", ")
                on_change=Callback::new(move |items: Vec<String>| {
                    draft.update(|d| {
                        d.update_step4(Step4Update { health_conditions: Some(items), ..Step4Update::default() });
                    });
                })
            />
            <ListField
                label="Favourite cuisines"
                initial=step4.preferred_cuisines.join(", ")
                on_change=Callback::new(move |items: Vec<String>| {
                    draft.update(|d| {
                        d.update_step4(Step4Update { preferred_cuisines: Some(items), ..Step4Update::default() });
                    });
                })
            />
        </div>
    }
}

/// Comma-separated free-text answer.
#[component]
fn ListField(label: &'static str, initial: String, on_change: Callback<Vec<String>>) -> impl IntoView {
    view! {
        <label class="onboarding-field">
            <span>{label}</span>
            <input
                type="text"
                placeholder="Separate with commas"
                prop:value=initial
                on:change=move |ev| on_change.run(parse_list(&event_target_value(&ev)))
            />
        </label>
    }
}
