//! Public landing page. Signed-in visitors are sent on to the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;
use session::routes;

use crate::components::guards::HomeRedirect;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HomeRedirect>
            <main class="home-page">
                <section class="home-hero">
                    <h1 class="home-hero__title">"Nourish"</h1>
                    <p class="home-hero__lead">
                        "Daily calorie and macro targets built from your body, your activity and your goals."
                    </p>
                    <div class="home-hero__actions">
                        <A href=routes::REGISTER attr:class="auth-button">"Get started"</A>
                        <A href=routes::LOGIN attr:class="auth-button auth-button--secondary">"Sign in"</A>
                    </div>
                </section>
            </main>
        </HomeRedirect>
    }
}
