//! Navigation targets shared by guards, flows and the router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ONBOARDING: &str = "/onboarding";
pub const DASHBOARD: &str = "/dashboard";

/// True for same-origin absolute paths (`/x`), rejecting protocol-relative `//host`.
#[must_use]
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Where to land after a successful login.
///
/// Users without a profile always go to onboarding. Otherwise a preserved
/// local return path wins over the dashboard; returning to the login or
/// register screens is pointless and ignored.
#[must_use]
pub fn post_login_target(has_profile: bool, return_to: Option<&str>) -> String {
    if !has_profile {
        return ONBOARDING.to_owned();
    }
    match return_to {
        Some(path) if is_local_path(path) && !is_auth_screen(path) => path.to_owned(),
        _ => DASHBOARD.to_owned(),
    }
}

fn is_auth_screen(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    bare == LOGIN || bare == REGISTER || bare == HOME
}
