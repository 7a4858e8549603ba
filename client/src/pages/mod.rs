//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Route gating happens in `app`, not in the pages.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod onboarding;
pub mod register;
