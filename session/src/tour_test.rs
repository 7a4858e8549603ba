use super::*;
use crate::storage::MemoryStore;

#[test]
fn fresh_store_has_nothing_completed() {
    let tours = TourStore::restore(MemoryStore::new());
    assert!(!tours.is_completed(DASHBOARD_TOUR));
}

#[test]
fn completion_persists_across_restore() {
    let storage = MemoryStore::new();
    let mut tours = TourStore::restore(storage.clone());
    tours.complete(DASHBOARD_TOUR);
    assert!(tours.is_completed(DASHBOARD_TOUR));

    let restored = TourStore::restore(storage);
    assert!(restored.is_completed(DASHBOARD_TOUR));
}

#[test]
fn reset_forgets_completions() {
    let storage = MemoryStore::new();
    let mut tours = TourStore::restore(storage.clone());
    tours.complete(DASHBOARD_TOUR);
    tours.complete("meals");
    tours.reset();
    assert!(!tours.is_completed("meals"));
    assert!(!TourStore::restore(storage).is_completed(DASHBOARD_TOUR));
}
