//! Networking for the nutrition API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only module that speaks HTTP; pages and guards go through the
//! `session::NutritionApi` trait it implements.

pub mod api;
