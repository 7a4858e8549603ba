//! Dashboard shortcut buttons.

#[cfg(test)]
#[path = "quick_actions_test.rs"]
mod quick_actions_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::routes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    Refresh,
    EditProfile,
    SignOut,
}

impl QuickAction {
    pub const ALL: [Self; 3] = [Self::Refresh, Self::EditProfile, Self::SignOut];

    pub fn label(self) -> &'static str {
        match self {
            Self::Refresh => "Refresh data",
            Self::EditProfile => "Edit profile",
            Self::SignOut => "Sign out",
        }
    }

    /// Route for actions that are plain navigation.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::EditProfile => Some(routes::ONBOARDING),
            Self::Refresh | Self::SignOut => None,
        }
    }
}

#[component]
pub fn QuickActions(on_refresh: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    let buttons = QuickAction::ALL
        .into_iter()
        .map(|action| match action.href() {
            Some(href) => view! {
                <A href=href attr:class="quick-actions__button">{action.label()}</A>
            }
            .into_any(),
            None => {
                let on_click = move |_| match action {
                    QuickAction::SignOut => on_sign_out.run(()),
                    QuickAction::Refresh | QuickAction::EditProfile => on_refresh.run(()),
                };
                view! {
                    <button class="quick-actions__button" type="button" on:click=on_click>
                        {action.label()}
                    </button>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <section class="card quick-actions" data-tour="quick-actions">
            <h2 class="card__title">"Quick actions"</h2>
            <div class="quick-actions__list">{buttons}</div>
        </section>
    }
}
