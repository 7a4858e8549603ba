use super::*;
use crate::types::ProfileSummary;

const T0: u64 = 1_700_000_000_000;

#[test]
fn fresh_value_is_returned() {
    let mut cache = QueryCache::new();
    let summary = ProfileSummary { has_profile: true, is_complete: true };
    cache.put(QueryKey::ProfileSummary, &summary, T0);
    assert_eq!(cache.get::<ProfileSummary>(QueryKey::ProfileSummary, T0 + 59_999), Some(summary));
}

#[test]
fn summary_goes_stale_after_a_minute() {
    let mut cache = QueryCache::new();
    cache.put(QueryKey::ProfileSummary, &ProfileSummary::default(), T0);
    assert!(cache.get::<ProfileSummary>(QueryKey::ProfileSummary, T0 + 60_000).is_none());
}

#[test]
fn user_stays_fresh_longer_than_summary() {
    assert!(QueryKey::CurrentUser.stale_after_ms() > QueryKey::ProfileSummary.stale_after_ms());
    assert_eq!(QueryKey::SubscriptionStatus.stale_after_ms(), 60_000);
}

#[test]
fn wrong_type_reads_as_miss() {
    let mut cache = QueryCache::new();
    cache.put(QueryKey::Profile, &"not a summary", T0);
    assert!(cache.get::<ProfileSummary>(QueryKey::Profile, T0).is_none());
}

#[test]
fn invalidate_all_drops_entries_but_keeps_in_flight() {
    let mut cache = QueryCache::new();
    cache.put(QueryKey::ProfileSummary, &ProfileSummary::default(), T0);
    cache.put(QueryKey::SubscriptionStatus, &1, T0);
    assert!(cache.begin_fetch(QueryKey::CurrentUser));

    cache.invalidate_all();

    assert!(cache.get::<ProfileSummary>(QueryKey::ProfileSummary, T0).is_none());
    assert!(cache.get::<i32>(QueryKey::SubscriptionStatus, T0).is_none());
    assert!(cache.is_fetching(QueryKey::CurrentUser));
}

#[test]
fn invalidate_single_key() {
    let mut cache = QueryCache::new();
    cache.put(QueryKey::ProfileSummary, &ProfileSummary::default(), T0);
    cache.put(QueryKey::SubscriptionStatus, &1, T0);
    cache.invalidate(QueryKey::ProfileSummary);
    assert!(cache.get::<ProfileSummary>(QueryKey::ProfileSummary, T0).is_none());
    assert_eq!(cache.get::<i32>(QueryKey::SubscriptionStatus, T0), Some(1));
}

#[test]
fn begin_fetch_deduplicates_by_key() {
    let mut cache = QueryCache::new();
    assert!(cache.begin_fetch(QueryKey::ProfileSummary));
    assert!(!cache.begin_fetch(QueryKey::ProfileSummary));
    assert!(cache.begin_fetch(QueryKey::SubscriptionStatus));
    cache.finish_fetch(QueryKey::ProfileSummary);
    assert!(cache.begin_fetch(QueryKey::ProfileSummary));
}

#[test]
fn clear_resets_everything() {
    let mut cache = QueryCache::new();
    cache.put(QueryKey::Profile, &1, T0);
    cache.begin_fetch(QueryKey::Profile);
    cache.clear();
    assert_eq!(cache, QueryCache::new());
}

#[test]
fn peek_ignores_staleness() {
    let mut cache = QueryCache::new();
    cache.put(QueryKey::SubscriptionStatus, &7, T0);
    assert!(cache.get::<i32>(QueryKey::SubscriptionStatus, T0 + 120_000).is_none());
    assert_eq!(cache.peek::<i32>(QueryKey::SubscriptionStatus), Some(7));
}

#[test]
fn needs_fetch_tracks_freshness_and_in_flight() {
    let mut cache = QueryCache::new();
    assert!(cache.needs_fetch(QueryKey::Profile, T0));
    cache.begin_fetch(QueryKey::Profile);
    assert!(!cache.needs_fetch(QueryKey::Profile, T0));
    cache.finish_fetch(QueryKey::Profile);
    cache.put(QueryKey::Profile, &1, T0);
    assert!(!cache.needs_fetch(QueryKey::Profile, T0 + 1_000));
    assert!(cache.needs_fetch(QueryKey::Profile, T0 + 300_000));
}
