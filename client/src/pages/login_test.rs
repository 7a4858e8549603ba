use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  a@b.com ", " secret "),
        Ok(Credentials { email: "a@b.com".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "x"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("alice", "x"), Err("Enter a valid email address."));
}

#[test]
fn looks_like_email_needs_local_part_and_dotted_domain() {
    assert!(looks_like_email("a@b.com"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a@localhost"));
    assert!(!looks_like_email("a@b."));
}
