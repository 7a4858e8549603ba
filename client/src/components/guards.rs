//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard snapshots the session into a `GuardInput`, asks
//! `session::guard::decide` what to do, and carries out the answer: render
//! children, show the checking indicator, navigate, or start the
//! profile-summary fetch. The decision itself is pure and tested in the
//! session crate; this module only performs effects.
//!
//! HYDRATION
//! =========
//! `mounted` flips to true in an effect, which only runs in the browser. The
//! server and the first client paint therefore agree on the checking state,
//! and storage-dependent decisions happen after hydration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::cache::{QueryCache, QueryKey};
use session::guard::{GuardAction, GuardKind, ProfileFetch, decide};
use session::routes;

use crate::state::session::Session;
use crate::util::auth::{full_path, guard_input};

/// Children render only with stored tokens or an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Protected, children)
}

/// Children render only for an authenticated user with a completed profile.
#[component]
pub fn ProfileRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::ProfileRequired, children)
}

/// Public page that sends signed-in visitors to the dashboard.
#[component]
pub fn HomeRedirect(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::HomeRedirect, children)
}

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let cache = expect_context::<RwSignal<QueryCache>>();
    let location = use_location();
    let navigate = use_navigate();

    let mounted = RwSignal::new(false);
    let profile_fetch = RwSignal::new(ProfileFetch::Idle);

    // Persisted flags can outlive the tokens (cleared in another tab, by
    // devtools, or by a failed refresh). Reconcile before deciding.
    Effect::new(move || {
        if session.with(Session::is_stale) {
            session.update(|s| {
                s.check_auth_state();
            });
        }
        mounted.set(true);
    });

    let action = Memo::new(move |_| {
        let path = full_path(&location.pathname.get(), &location.search.get());
        session.with(|s| decide(kind, &guard_input(s, mounted.get(), profile_fetch.get(), path)))
    });

    Effect::new(move || match action.get() {
        GuardAction::RedirectLogin { return_to } => {
            session.update(|s| s.remember_return_to(return_to));
            navigate(routes::LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        GuardAction::LoadProfile => load_profile_status(session, cache, profile_fetch),
        other => {
            if let Some(target) = other.redirect_path() {
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    view! {
        {move || match action.get() {
            GuardAction::Render => children().into_any(),
            _ => {
                view! {
                    <div class="route-guard" role="status">
                        <span class="route-guard__spinner" aria-hidden="true"></span>
                        <p class="route-guard__label">"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Fetch the profile summary once and commit the outcome to the session.
///
/// A failed fetch commits `has_profile = false`; sibling guards then see the
/// committed flag instead of fetching again.
fn load_profile_status(session: RwSignal<Session>, cache: RwSignal<QueryCache>, profile_fetch: RwSignal<ProfileFetch>) {
    profile_fetch.set(ProfileFetch::Pending);
    let claimed = cache.try_update(|c| c.begin_fetch(QueryKey::ProfileSummary)).unwrap_or(false);
    if !claimed {
        // Another guard is already fetching; its commit re-runs our decision.
        return;
    }
    session.update(|s| s.set_checking_profile(true));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = session::flows::fetch_profile_status(&crate::net::api::HttpApi::new()).await;
        let failed = result.is_err();
        let has_profile = session::guard::profile_status_from_fetch(result);

        cache.update(|c| c.finish_fetch(QueryKey::ProfileSummary));
        session.update(|s| {
            s.set_checking_profile(false);
            s.set_profile_status(has_profile);
        });
        profile_fetch.set(if failed { ProfileFetch::Failed } else { ProfileFetch::Idle });
    });
}
