//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render guards, dashboard cards and notifications while
//! reading/writing shared state from Leptos context providers.

pub mod coach;
pub mod guards;
pub mod quick_actions;
pub mod stats;
pub mod subscription_banner;
pub mod toasts;
pub mod tour_hint;
