//! Error types for API calls and session transitions.

use crate::onboarding::MissingFields;

/// Failure talking to the remote nutrition API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// HTTP is only available in the browser; server-side rendering gets this.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the server rejected the credentials or the access token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Failure of a session transition. Nothing is committed to state when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("login failed: {0}")]
    Login(#[source] ApiError),

    #[error("registration failed: {0}")]
    Register(#[source] ApiError),

    #[error("profile is incomplete: {0}")]
    IncompleteProfile(#[from] MissingFields),

    #[error("profile submission failed: {0}")]
    SubmitProfile(#[source] ApiError),
}

impl SessionError {
    /// Short message suitable for a toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Login(err) if err.is_unauthorized() => "Invalid email or password.".to_owned(),
            Self::Login(_) => "Could not sign in. Please try again.".to_owned(),
            Self::Register(ApiError::Status { status: 409, .. }) => {
                "An account with this email already exists.".to_owned()
            }
            Self::Register(_) => "Could not create your account. Please try again.".to_owned(),
            Self::IncompleteProfile(missing) => format!("Please fill in: {missing}."),
            Self::SubmitProfile(_) => "Could not save your profile. Please try again.".to_owned(),
        }
    }
}
