//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components call [`decide`] on every render with a snapshot of the
//! session store and the profile-summary fetch. The function holds no history:
//! the same inputs always produce the same action, so there is nothing to
//! reset between navigations.
//!
//! KNOWN BEHAVIOR
//! ==============
//! A failed profile-summary fetch is treated exactly like "no profile" and
//! routes to onboarding. That conflates "couldn't check" with "confirmed
//! missing" but keeps access closed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes;

/// Which guard is evaluating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Requires tokens or an authenticated session.
    Protected,
    /// Requires authentication and a completed profile.
    ProfileRequired,
    /// Public landing page that bounces signed-in visitors to the dashboard.
    HomeRedirect,
}

/// State of the profile-summary fetch driven by the profile guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileFetch {
    #[default]
    Idle,
    Pending,
    Failed,
}

/// Everything a guard looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardInput {
    /// False until browser storage is readable (server render, first paint).
    pub mounted: bool,
    /// Result of `check_auth_state()` for this render.
    pub tokens_present: bool,
    pub is_authenticated: bool,
    pub has_user: bool,
    pub has_profile: Option<bool>,
    pub profile_fetch: ProfileFetch,
    /// Location being rendered, preserved for post-login return.
    pub path: String,
}

/// What the guard should do this render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardAction {
    /// Show the loading indicator.
    Checking,
    RedirectLogin { return_to: String },
    RedirectOnboarding,
    RedirectDashboard,
    /// Show the loading indicator and start the profile-summary fetch.
    LoadProfile,
    Render,
}

impl GuardAction {
    /// Navigation target for redirecting actions.
    #[must_use]
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Self::RedirectLogin { .. } => Some(routes::LOGIN),
            Self::RedirectOnboarding => Some(routes::ONBOARDING),
            Self::RedirectDashboard => Some(routes::DASHBOARD),
            Self::Checking | Self::LoadProfile | Self::Render => None,
        }
    }
}

/// Evaluate a guard.
#[must_use]
pub fn decide(kind: GuardKind, input: &GuardInput) -> GuardAction {
    match kind {
        GuardKind::Protected => protected(input),
        GuardKind::ProfileRequired => match protected(input) {
            GuardAction::Render => profile_required(input),
            other => other,
        },
        GuardKind::HomeRedirect => home_redirect(input),
    }
}

fn protected(input: &GuardInput) -> GuardAction {
    if !input.mounted {
        return GuardAction::Checking;
    }
    if !input.tokens_present && !input.is_authenticated {
        return GuardAction::RedirectLogin { return_to: input.path.clone() };
    }
    GuardAction::Render
}

fn profile_required(input: &GuardInput) -> GuardAction {
    match input.has_profile {
        Some(true) => GuardAction::Render,
        Some(false) => GuardAction::RedirectOnboarding,
        None => match input.profile_fetch {
            ProfileFetch::Idle if input.tokens_present => GuardAction::LoadProfile,
            // Authenticated flag without tokens: nothing to fetch with.
            ProfileFetch::Idle | ProfileFetch::Failed => GuardAction::RedirectOnboarding,
            ProfileFetch::Pending => GuardAction::Checking,
        },
    }
}

fn home_redirect(input: &GuardInput) -> GuardAction {
    if input.mounted && input.is_authenticated && input.tokens_present && input.has_user {
        GuardAction::RedirectDashboard
    } else {
        GuardAction::Render
    }
}

/// Fold a profile-summary fetch outcome into the profile flag to commit.
pub fn profile_status_from_fetch<E: std::fmt::Display>(result: Result<bool, E>) -> bool {
    match result {
        Ok(has_profile) => has_profile,
        Err(e) => {
            log::warn!("profile summary fetch failed, routing to onboarding: {e}");
            false
        }
    }
}
