use super::*;
use session::MemoryStore;
use session::guard::{GuardAction, GuardKind, decide};
use session::types::{TokenPair, User};

fn user() -> User {
    User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: "Alice".to_owned(), language: None }
}

#[test]
fn full_path_without_query() {
    assert_eq!(full_path("/dashboard", ""), "/dashboard");
}

#[test]
fn full_path_accepts_search_with_or_without_question_mark() {
    assert_eq!(full_path("/dashboard", "?week=2"), "/dashboard?week=2");
    assert_eq!(full_path("/dashboard", "week=2"), "/dashboard?week=2");
}

#[test]
fn guard_input_reflects_logged_out_store() {
    let store = SessionStore::restore(MemoryStore::new());
    let input = guard_input(&store, true, ProfileFetch::Idle, "/dashboard".to_owned());
    assert!(!input.tokens_present);
    assert!(!input.is_authenticated);
    assert_eq!(
        decide(GuardKind::Protected, &input),
        GuardAction::RedirectLogin { return_to: "/dashboard".to_owned() }
    );
}

#[test]
fn guard_input_reflects_signed_in_store() {
    let mut store = SessionStore::restore(MemoryStore::new());
    store.tokens().set_tokens(&TokenPair { access_token: "a".to_owned(), refresh_token: "r".to_owned() });
    store.commit(user(), true);
    let input = guard_input(&store, true, ProfileFetch::Idle, "/".to_owned());
    assert!(input.tokens_present);
    assert!(input.has_user);
    assert_eq!(input.has_profile, Some(true));
    assert_eq!(decide(GuardKind::HomeRedirect, &input), GuardAction::RedirectDashboard);
}
