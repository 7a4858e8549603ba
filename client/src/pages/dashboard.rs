//! Dashboard page: daily targets, coach tips, quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the profile guard, so a profile exists by the time this
//! mounts. The full profile and subscription status come from the query cache;
//! stale or missing entries are refetched on mount, and cached values keep
//! showing while a refetch runs.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::NutritionApi;
use session::cache::{QueryCache, QueryKey};
use session::subscription::SubscriptionStatus;
use session::targets::daily_targets;
use session::tour::DASHBOARD_TOUR;
use session::types::Profile;

use crate::components::coach::CoachCard;
use crate::components::quick_actions::QuickActions;
use crate::components::stats::DailyStats;
use crate::components::subscription_banner::SubscriptionBanner;
use crate::components::tour_hint::TourHint;
use crate::state::session::{Session, fetch_query, sign_out};
use crate::state::toast::ToastState;

fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => {
            let first = name.split_whitespace().next().unwrap_or(name);
            format!("Hi, {first}")
        }
        None => "Hi there".to_owned(),
    }
}

/// What the profile area should show.
#[derive(Clone, Debug, PartialEq)]
enum ProfileView {
    Ready(Profile),
    Loading,
    Unavailable,
}

fn profile_view(cache: &QueryCache) -> ProfileView {
    match cache.peek::<Profile>(QueryKey::Profile) {
        Some(profile) => ProfileView::Ready(profile),
        None if cache.is_fetching(QueryKey::Profile) => ProfileView::Loading,
        None => ProfileView::Unavailable,
    }
}

fn load_dashboard(cache: RwSignal<QueryCache>) {
    fetch_query(cache, QueryKey::Profile, |api| async move { api.profile().await });
    fetch_query(cache, QueryKey::SubscriptionStatus, |api| async move { api.subscription_status().await });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let cache = expect_context::<RwSignal<QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let mounted = RwSignal::new(false);
    Effect::new(move || {
        load_dashboard(cache);
        mounted.set(true);
    });

    let redirect = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(target) = redirect.get() {
            navigate(target, NavigateOptions::default());
        }
    });

    let on_refresh = Callback::new(move |()| {
        cache.update(QueryCache::invalidate_all);
        load_dashboard(cache);
        toasts.update(|t| {
            t.info("Refreshing your data...");
        });
    });
    let on_sign_out = Callback::new(move |()| sign_out(session, cache, toasts, redirect));

    let title = move || session.with(|s| greeting(s.state().user.as_ref().map(|u| u.name.as_str())));
    let profile_area = move || if mounted.get() { cache.with(profile_view) } else { ProfileView::Loading };
    let subscription = move || cache.with(|c| c.peek::<SubscriptionStatus>(QueryKey::SubscriptionStatus));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1 class="dashboard-page__title">{title}</h1>
            </header>
            {move || subscription().map(|status| view! { <SubscriptionBanner status=status/> })}
            <TourHint
                tour=DASHBOARD_TOUR
                title="Your daily plan"
                body="Targets update from your profile. Use Edit profile whenever your weight or goal changes."
            />
            <div class="dashboard-page__grid">
                {move || match profile_area() {
                    ProfileView::Ready(profile) => {
                        let targets = daily_targets(&profile);
                        view! {
                            <DailyStats targets=targets/>
                            <CoachCard profile=profile/>
                        }
                            .into_any()
                    }
                    ProfileView::Loading => {
                        view! { <p class="dashboard-page__status">"Loading your plan..."</p> }.into_any()
                    }
                    ProfileView::Unavailable => {
                        view! {
                            <p class="dashboard-page__status">"We couldn't load your profile. Try Refresh data."</p>
                        }
                            .into_any()
                    }
                }}
                <QuickActions on_refresh=on_refresh on_sign_out=on_sign_out/>
            </div>
        </div>
    }
}
