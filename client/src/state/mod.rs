//! Client application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` wires the framework-free session stores to signals and the HTTP
//! client; `toast` holds transient notifications.

pub mod session;
pub mod toast;
