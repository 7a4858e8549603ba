//! Trial / free-tier banner above the dashboard.

use leptos::prelude::*;
use session::subscription::SubscriptionStatus;

/// Renders nothing for paid subscriptions.
#[component]
pub fn SubscriptionBanner(status: SubscriptionStatus) -> impl IntoView {
    status.banner().map(|message| {
        view! {
            <aside class="subscription-banner" role="note">
                <span class="subscription-banner__text">{message}</span>
            </aside>
        }
    })
}
