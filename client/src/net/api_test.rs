use super::*;

#[test]
fn endpoint_joins_without_double_slashes() {
    assert_eq!(endpoint("/api", "users/me"), "/api/users/me");
    assert_eq!(endpoint("/api/", "/users/me"), "/api/users/me");
    assert_eq!(endpoint("https://api.example.test/v1", "profiles"), "https://api.example.test/v1/profiles");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn status_error_prefers_json_detail() {
    assert_eq!(
        status_error(401, r#"{"detail":"Invalid credentials"}"#),
        ApiError::Status { status: 401, message: "Invalid credentials".to_owned() }
    );
    assert_eq!(
        status_error(409, r#"{"message":"taken"}"#),
        ApiError::Status { status: 409, message: "taken".to_owned() }
    );
}

#[test]
fn status_error_falls_back_to_raw_body() {
    assert_eq!(
        status_error(502, " Bad Gateway \n"),
        ApiError::Status { status: 502, message: "Bad Gateway".to_owned() }
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let api = HttpApi::new();
    let result = block_on_ready(api.current_user());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drives a future that never actually suspends (the SSR stubs return immediately).
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("SSR api stub should resolve immediately"),
    }
}
