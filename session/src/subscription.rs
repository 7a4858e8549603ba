//! Subscription tier/trial status, consumed only for the dashboard banner.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    pub tier: Tier,
    #[serde(default)]
    pub is_trial: bool,
    #[serde(default)]
    pub trial_days_left: Option<u32>,
}

impl SubscriptionStatus {
    /// Banner text, or `None` for a paid subscription.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        if self.is_trial {
            return Some(match self.trial_days_left {
                Some(0) => "Your Premium trial ends today.".to_owned(),
                Some(1) => "1 day left in your Premium trial.".to_owned(),
                Some(days) => format!("{days} days left in your Premium trial."),
                None => "You are on a Premium trial.".to_owned(),
            });
        }
        match self.tier {
            Tier::Free => Some("Upgrade to Premium for personalized meal plans.".to_owned()),
            Tier::Premium => None,
        }
    }
}
