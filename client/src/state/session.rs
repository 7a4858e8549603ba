//! Session wiring between the Leptos tree and the `session` crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per store (session, query cache, onboarding
//! draft, tours, toasts). Pages and guards call into this module instead of
//! touching the stores directly, so every login, logout and profile check
//! applies the same cache invalidation and persistence rules.
//!
//! All async work is spawned with `spawn_local` and only exists in the
//! hydrated build; on the server these helpers are inert.

use leptos::prelude::*;
use serde::Serialize;
use session::cache::{QueryCache, QueryKey};
use session::flows::LoginCommit;
use session::tour::TourStore;
use session::{ApiError, SessionStore};

use crate::net::api::HttpApi;
use crate::state::toast::ToastState;
use crate::util::browser::now_ms;
use crate::util::storage::BrowserStore;

pub type Session = SessionStore<BrowserStore>;
pub type Tours = TourStore<BrowserStore>;

pub fn restore_session() -> Session {
    SessionStore::restore(BrowserStore)
}

pub fn restore_tours() -> Tours {
    TourStore::restore(BrowserStore)
}

/// Commit a finished login or registration and drop every cached query.
pub fn apply_login(session: RwSignal<Session>, cache: RwSignal<QueryCache>, commit: &LoginCommit) {
    session.update(|s| {
        s.commit(commit.user.clone(), commit.has_profile);
        s.take_return_to();
    });
    cache.update(QueryCache::invalidate_all);
}

/// Reset local session state and cache. Tokens are cleared by `SessionStore::logout`.
pub fn apply_logout(session: RwSignal<Session>, cache: RwSignal<QueryCache>) {
    session.update(SessionStore::logout);
    cache.update(QueryCache::clear);
}

/// Run the logout flow, then publish the route to leave for through `redirect`.
///
/// Navigation is left to the caller's effect so this can run from a
/// `Callback`, which must stay `Send`.
pub fn sign_out(
    session: RwSignal<Session>,
    cache: RwSignal<QueryCache>,
    toasts: RwSignal<ToastState>,
    redirect: RwSignal<Option<&'static str>>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let tokens = session.with_untracked(|s| s.tokens().clone());
        let target = session::flows::logout(&HttpApi::new(), &tokens).await;
        apply_logout(session, cache);
        toasts.update(|t| {
            t.info("You have been signed out.");
        });
        redirect.set(Some(target));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, cache, toasts, redirect);
    }
}

/// Fetch `key` into the cache unless a fresh value or an in-flight request exists.
pub fn fetch_query<T, F, Fut>(cache: RwSignal<QueryCache>, key: QueryKey, fetch: F)
where
    T: Serialize + 'static,
    F: FnOnce(HttpApi) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let claimed = cache
        .try_update(|c| c.needs_fetch(key, now_ms()) && c.begin_fetch(key))
        .unwrap_or(false);
    if !claimed {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch(HttpApi::new()).await;
        cache.update(|c| {
            c.finish_fetch(key);
            match result {
                Ok(value) => c.put(key, &value, now_ms()),
                Err(e) => log::warn!("{key:?} fetch failed: {e}"),
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fetch;
        cache.update(|c| c.finish_fetch(key));
    }
}
