//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::cache::QueryCache;
use session::onboarding::OnboardingDraft;

use crate::components::guards::{ProfileRoute, ProtectedRoute};
use crate::components::toasts::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, onboarding::OnboardingPage, register::RegisterPage,
};
use crate::state::session::{restore_session, restore_tours};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, query cache, onboarding draft, tour flags and toasts
/// as `RwSignal` contexts, then sets up client-side routing. Stores restore
/// from browser storage here; during SSR they start empty.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(restore_session()));
    provide_context(RwSignal::new(QueryCache::new()));
    provide_context(RwSignal::new(OnboardingDraft::new()));
    provide_context(RwSignal::new(restore_tours()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/nourish.css"/>
        <Title text="Nourish"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("onboarding")
                    view=|| view! { <ProtectedRoute><OnboardingPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProfileRoute><DashboardPage/></ProfileRoute> }
                />
            </Routes>
        </Router>
    }
}
