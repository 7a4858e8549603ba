use super::*;

#[test]
fn only_edit_profile_navigates() {
    let links: Vec<_> = QuickAction::ALL.iter().filter_map(|a| a.href()).collect();
    assert_eq!(links, vec![routes::ONBOARDING]);
}

#[test]
fn labels_are_distinct() {
    let mut labels: Vec<_> = QuickAction::ALL.iter().map(|a| a.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), QuickAction::ALL.len());
}
