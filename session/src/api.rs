//! Remote API seam.
//!
//! The browser client implements [`NutritionApi`] over HTTP; tests script it
//! in memory. Futures are `?Send` because browser fetch futures are
//! single-threaded.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::subscription::SubscriptionStatus;
use crate::types::{Credentials, Profile, ProfileCreate, ProfileSummary, Registration, TokenPair, User, UserUpdate};

#[async_trait(?Send)]
pub trait NutritionApi {
    /// Exchange credentials for a token pair.
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError>;

    /// Create an account. Does not sign in.
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// Revoke the refresh token server-side.
    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError>;

    async fn current_user(&self) -> Result<User, ApiError>;

    async fn update_current_user(&self, update: &UserUpdate) -> Result<User, ApiError>;

    async fn profile_summary(&self) -> Result<ProfileSummary, ApiError>;

    async fn profile(&self) -> Result<Profile, ApiError>;

    async fn create_profile(&self, profile: &ProfileCreate) -> Result<Profile, ApiError>;

    /// Replace the caller's existing profile.
    async fn update_profile(&self, profile: &ProfileCreate) -> Result<Profile, ApiError>;

    async fn subscription_status(&self) -> Result<SubscriptionStatus, ApiError>;
}
