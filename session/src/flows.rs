//! Login, registration, logout and onboarding submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow runs its network steps first and hands back a commit value; the
//! caller applies it to the session store in one synchronous update. A flow
//! that fails part-way therefore leaves the session untouched, and tokens it
//! wrote along the way are removed again.
//!
//! ERROR HANDLING
//! ==============
//! Token, user and profile-summary failures abort the flow. Language sync and
//! the server-side logout call are best-effort: logged, never returned.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use crate::api::NutritionApi;
use crate::error::{ApiError, SessionError};
use crate::onboarding::OnboardingDraft;
use crate::routes;
use crate::storage::KeyValueStore;
use crate::tokens::TokenStore;
use crate::types::{Credentials, Profile, ProfileSummary, Registration, User, UserUpdate};

/// Result of a successful login or registration, ready to commit.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginCommit {
    pub user: User,
    pub has_profile: bool,
    /// Route to navigate to once committed.
    pub target: String,
}

/// Sign in with `credentials`.
///
/// `locale` is the client's normalized language; when it differs from the
/// server-side preference the server is updated. `return_to` is the path an
/// unauthenticated visitor was bounced from.
///
/// # Errors
///
/// Returns [`SessionError::Login`] when the token, user or profile-summary
/// request fails. No tokens remain stored in that case.
pub async fn login<A, S>(
    api: &A,
    tokens: &TokenStore<S>,
    credentials: &Credentials,
    locale: Option<&str>,
    return_to: Option<&str>,
) -> Result<LoginCommit, SessionError>
where
    A: NutritionApi + ?Sized,
    S: KeyValueStore,
{
    let pair = api.login(credentials).await.map_err(SessionError::Login)?;
    tokens.set_tokens(&pair);

    let (user, summary) = match fetch_identity(api).await {
        Ok(identity) => identity,
        Err(e) => {
            tokens.clear_tokens();
            return Err(SessionError::Login(e));
        }
    };
    log::info!("signed in user {}", user.id);

    let user = sync_language(api, user, locale).await;
    Ok(LoginCommit {
        target: routes::post_login_target(summary.has_profile, return_to),
        has_profile: summary.has_profile,
        user,
    })
}

/// Create an account and sign straight into it.
///
/// New accounts have no profile, so the commit always targets onboarding.
///
/// # Errors
///
/// [`SessionError::Register`] when the account could not be created;
/// [`SessionError::Login`] when the follow-up sign-in or user fetch fails.
pub async fn register<A, S>(
    api: &A,
    tokens: &TokenStore<S>,
    registration: &Registration,
) -> Result<LoginCommit, SessionError>
where
    A: NutritionApi + ?Sized,
    S: KeyValueStore,
{
    api.register(registration).await.map_err(SessionError::Register)?;

    let pair = api
        .login(&registration.credentials())
        .await
        .map_err(SessionError::Login)?;
    tokens.set_tokens(&pair);

    let user = match api.current_user().await {
        Ok(user) => user,
        Err(e) => {
            tokens.clear_tokens();
            return Err(SessionError::Login(e));
        }
    };
    log::info!("registered user {}", user.id);

    Ok(LoginCommit { user, has_profile: false, target: routes::ONBOARDING.to_owned() })
}

/// Sign out server-side (best effort) and always drop local tokens.
///
/// Returns the route to navigate to.
pub async fn logout<A, S>(api: &A, tokens: &TokenStore<S>) -> &'static str
where
    A: NutritionApi + ?Sized,
    S: KeyValueStore,
{
    let refresh = tokens.refresh_token();
    if let Err(e) = api.logout(refresh.as_deref()).await {
        log::debug!("server logout failed, signing out locally anyway: {e}");
    }
    tokens.clear_tokens();
    routes::LOGIN
}

/// Validate the onboarding draft, then create the profile or update the one being edited.
///
/// # Errors
///
/// [`SessionError::IncompleteProfile`] before any request when required
/// fields are missing; [`SessionError::SubmitProfile`] when the API rejects it.
pub async fn submit_profile<A>(api: &A, draft: &OnboardingDraft) -> Result<Profile, SessionError>
where
    A: NutritionApi + ?Sized,
{
    let payload = draft.validate()?;
    let saved = if draft.is_editing() {
        api.update_profile(&payload).await
    } else {
        api.create_profile(&payload).await
    };
    saved.map_err(SessionError::SubmitProfile)
}

/// Profile flag used by the profile-required guard.
///
/// # Errors
///
/// Propagates the API error; the guard folds it into "no profile".
pub async fn fetch_profile_status<A>(api: &A) -> Result<bool, ApiError>
where
    A: NutritionApi + ?Sized,
{
    api.profile_summary().await.map(|summary| summary.has_profile)
}

async fn fetch_identity<A>(api: &A) -> Result<(User, ProfileSummary), ApiError>
where
    A: NutritionApi + ?Sized,
{
    let user = api.current_user().await?;
    let summary = api.profile_summary().await?;
    Ok((user, summary))
}

async fn sync_language<A>(api: &A, user: User, locale: Option<&str>) -> User
where
    A: NutritionApi + ?Sized,
{
    let Some(locale) = locale else {
        return user;
    };
    if user.language.as_deref() == Some(locale) {
        return user;
    }
    let update = UserUpdate { language: Some(locale.to_owned()), ..UserUpdate::default() };
    match api.update_current_user(&update).await {
        Ok(updated) => updated,
        Err(e) => {
            log::warn!("language preference sync failed: {e}");
            user
        }
    }
}
