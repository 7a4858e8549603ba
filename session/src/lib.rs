//! Framework-free session core for the Nourish web client.
//!
//! This crate owns the state that decides who may see what: stored tokens,
//! the persisted auth flags, route-guard decisions, the onboarding draft and
//! the login/register/logout flows. It has no UI or browser dependency; the
//! `client` crate injects storage and HTTP through [`storage::KeyValueStore`]
//! and [`api::NutritionApi`] and wraps the stores in reactive signals.

pub mod api;
pub mod cache;
pub mod error;
pub mod flows;
pub mod guard;
pub mod locale;
pub mod onboarding;
pub mod routes;
pub mod storage;
pub mod store;
pub mod subscription;
pub mod targets;
pub mod tokens;
pub mod tour;
pub mod types;

pub use api::NutritionApi;
pub use error::{ApiError, SessionError};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{SessionState, SessionStore};
