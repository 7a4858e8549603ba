//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs `session::flows::login`, commits the result to the shared session,
//! and navigates to the target it computed: onboarding for users without a
//! profile, otherwise the page a guard bounced them from or the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::routes;
use session::types::Credentials;

#[cfg(feature = "hydrate")]
use crate::state::session::apply_login;
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Cheap shape check; the server is the authority.
pub(crate) fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let cache = expect_context::<RwSignal<session::cache::QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let locale = crate::util::browser::client_locale();
                let (tokens, return_to) =
                    session.with_untracked(|s| (s.tokens().clone(), s.return_to().map(str::to_owned)));
                let api = crate::net::api::HttpApi::new();
                match session::flows::login(&api, &tokens, &credentials, Some(&locale), return_to.as_deref()).await {
                    Ok(commit) => {
                        apply_login(session, cache, &commit);
                        toasts.update(|t| {
                            t.success(format!("Welcome back, {}!", commit.user.name));
                        });
                        password.set(String::new());
                        busy.set(false);
                        navigate(&commit.target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::info!("login failed: {e}");
                        let message = e.user_message();
                        toasts.update(|t| {
                            t.error(message.clone());
                        });
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, cache, toasts, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Nourish"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "New here? "
                    <A href=routes::REGISTER>"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
