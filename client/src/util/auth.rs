//! Shared auth helpers for route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guard builds its decision input the same way; keeping that here
//! means protected, profile-gated and home routes cannot drift apart.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::guard::{GuardInput, ProfileFetch};
use session::{KeyValueStore, SessionStore};

/// Join router pathname and query string into a navigable path.
pub fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Snapshot the session for [`session::guard::decide`].
///
/// `check_auth_state` has already run for this render, so token presence is
/// read straight from storage.
pub fn guard_input<S>(store: &SessionStore<S>, mounted: bool, profile_fetch: ProfileFetch, path: String) -> GuardInput
where
    S: KeyValueStore + Clone,
{
    let state = store.state();
    GuardInput {
        mounted,
        tokens_present: store.tokens().has_any(),
        is_authenticated: state.is_authenticated,
        has_user: state.user.is_some(),
        has_profile: state.has_profile,
        profile_fetch,
        path,
    }
}
