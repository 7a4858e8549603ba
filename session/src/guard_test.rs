use super::*;

fn signed_in() -> GuardInput {
    GuardInput {
        mounted: true,
        tokens_present: true,
        is_authenticated: true,
        has_user: true,
        has_profile: Some(true),
        profile_fetch: ProfileFetch::Idle,
        path: "/dashboard".to_owned(),
    }
}

fn anonymous(path: &str) -> GuardInput {
    GuardInput { mounted: true, path: path.to_owned(), ..GuardInput::default() }
}

// =============================================================
// Protected
// =============================================================

#[test]
fn protected_checks_before_mount() {
    let input = GuardInput { mounted: false, ..anonymous("/dashboard") };
    assert_eq!(decide(GuardKind::Protected, &input), GuardAction::Checking);
}

#[test]
fn protected_without_tokens_redirects_to_login_with_return_path() {
    let action = decide(GuardKind::Protected, &anonymous("/dashboard"));
    assert_eq!(action, GuardAction::RedirectLogin { return_to: "/dashboard".to_owned() });
    assert_eq!(action.redirect_path(), Some(routes::LOGIN));
}

#[test]
fn protected_renders_with_tokens_even_before_user_loads() {
    let input = GuardInput { tokens_present: true, ..anonymous("/dashboard") };
    assert_eq!(decide(GuardKind::Protected, &input), GuardAction::Render);
}

#[test]
fn protected_renders_when_signed_in() {
    assert_eq!(decide(GuardKind::Protected, &signed_in()), GuardAction::Render);
}

// =============================================================
// ProfileRequired
// =============================================================

#[test]
fn profile_required_without_tokens_redirects_to_login() {
    let action = decide(GuardKind::ProfileRequired, &anonymous("/dashboard"));
    assert!(matches!(action, GuardAction::RedirectLogin { .. }));
}

#[test]
fn profile_required_renders_with_profile() {
    assert_eq!(decide(GuardKind::ProfileRequired, &signed_in()), GuardAction::Render);
}

#[test]
fn profile_required_without_profile_goes_to_onboarding() {
    let input = GuardInput { has_profile: Some(false), ..signed_in() };
    assert_eq!(decide(GuardKind::ProfileRequired, &input), GuardAction::RedirectOnboarding);
}

#[test]
fn profile_required_unknown_profile_loads_then_waits() {
    let idle = GuardInput { has_profile: None, ..signed_in() };
    assert_eq!(decide(GuardKind::ProfileRequired, &idle), GuardAction::LoadProfile);

    let pending = GuardInput { profile_fetch: ProfileFetch::Pending, ..idle };
    assert_eq!(decide(GuardKind::ProfileRequired, &pending), GuardAction::Checking);
}

#[test]
fn profile_required_failed_fetch_commits_false_and_onboards() {
    let failed = GuardInput { has_profile: None, profile_fetch: ProfileFetch::Failed, ..signed_in() };
    assert_eq!(decide(GuardKind::ProfileRequired, &failed), GuardAction::RedirectOnboarding);

    let committed = profile_status_from_fetch::<&str>(Err("offline"));
    assert!(!committed);
    let after = GuardInput { has_profile: Some(committed), profile_fetch: ProfileFetch::Idle, ..failed };
    assert_eq!(decide(GuardKind::ProfileRequired, &after), GuardAction::RedirectOnboarding);
}

#[test]
fn profile_status_from_successful_fetch_passes_through() {
    assert!(profile_status_from_fetch::<&str>(Ok(true)));
    assert!(!profile_status_from_fetch::<&str>(Ok(false)));
}

// =============================================================
// HomeRedirect
// =============================================================

#[test]
fn home_redirects_signed_in_visitors() {
    let action = decide(GuardKind::HomeRedirect, &signed_in());
    assert_eq!(action, GuardAction::RedirectDashboard);
    assert_eq!(action.redirect_path(), Some(routes::DASHBOARD));
}

#[test]
fn home_renders_for_anonymous_visitors() {
    assert_eq!(decide(GuardKind::HomeRedirect, &anonymous("/")), GuardAction::Render);
}

#[test]
fn home_renders_when_user_not_loaded() {
    let input = GuardInput { has_user: false, ..signed_in() };
    assert_eq!(decide(GuardKind::HomeRedirect, &input), GuardAction::Render);
}

#[test]
fn home_renders_with_stale_flag_but_no_tokens() {
    let input = GuardInput { tokens_present: false, ..signed_in() };
    assert_eq!(decide(GuardKind::HomeRedirect, &input), GuardAction::Render);
}

#[test]
fn decide_is_pure() {
    let input = GuardInput { has_profile: None, ..signed_in() };
    let first = decide(GuardKind::ProfileRequired, &input);
    let second = decide(GuardKind::ProfileRequired, &input);
    assert_eq!(first, second);
}
