//! Account creation page.
//!
//! Registration signs straight into the new account and always continues to
//! onboarding, since a fresh account never has a profile.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::routes;
use session::types::Registration;

use crate::pages::login::looks_like_email;
#[cfg(feature = "hydrate")]
use crate::state::session::apply_login;
use crate::state::session::Session;
use crate::state::toast::ToastState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm: String,
}

fn validate_register_input(form: &RegisterForm, language: Option<String>) -> Result<Registration, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in your name, email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration { email: email.to_owned(), password: form.password.clone(), name: name.to_owned(), language })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let cache = expect_context::<RwSignal<session::cache::QueryCache>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let language = Some(crate::util::browser::client_locale());
        let registration = match form.with(|f| validate_register_input(f, language)) {
            Ok(registration) => registration,
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
                let tokens = session.with_untracked(|s| s.tokens().clone());
                let api = crate::net::api::HttpApi::new();
                match session::flows::register(&api, &tokens, &registration).await {
                    Ok(commit) => {
                        apply_login(session, cache, &commit);
                        toasts.update(|t| {
                            t.success("Account created. Let's set up your profile.");
                        });
                        form.set(RegisterForm::default());
                        busy.set(false);
                        navigate(&commit.target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::info!("registration failed: {e}");
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
            let _ = (registration, session, cache, toasts, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Nourish"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        autocomplete="name"
                        placeholder="Name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm.clone())
                        on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=routes::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
