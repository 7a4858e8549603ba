//! Completion flags for dismissible hint tours.
//!
//! Unrelated to profile onboarding: a tour is a one-time overlay explaining a
//! screen. Completed tour ids persist under [`TOUR_STORAGE_KEY`].

#[cfg(test)]
#[path = "tour_test.rs"]
mod tour_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, load_json, save_json};

pub const TOUR_STORAGE_KEY: &str = "tour-storage";

/// Tour shown on the first dashboard visit.
pub const DASHBOARD_TOUR: &str = "dashboard";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedTours {
    completed: BTreeSet<String>,
}

#[derive(Clone, Debug)]
pub struct TourStore<S> {
    completed: BTreeSet<String>,
    storage: S,
}

impl<S: KeyValueStore> TourStore<S> {
    pub fn restore(storage: S) -> Self {
        let completed = load_json::<PersistedTours>(&storage, TOUR_STORAGE_KEY)
            .map(|p| p.completed)
            .unwrap_or_default();
        Self { completed, storage }
    }

    pub fn is_completed(&self, tour: &str) -> bool {
        self.completed.contains(tour)
    }

    pub fn complete(&mut self, tour: &str) {
        if self.completed.insert(tour.to_owned()) {
            self.persist();
        }
    }

    /// Forget every completed tour so hints show again.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.persist();
    }

    fn persist(&self) {
        save_json(&self.storage, TOUR_STORAGE_KEY, &PersistedTours { completed: self.completed.clone() });
    }
}
