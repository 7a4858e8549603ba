use super::*;

fn complete_draft() -> OnboardingDraft {
    let mut draft = OnboardingDraft::new();
    draft.update_step1(Step1 {
        age: Some(34),
        gender: Some(Gender::Female),
        height_cm: Some(168.0),
        weight_kg: Some(62.5),
    });
    draft.update_step2(Step2 { activity_level: Some(ActivityLevel::Moderate), goal: Some(Goal::Maintain) });
    draft
}

// =============================================================
// step navigation
// =============================================================

#[test]
fn starts_on_first_step() {
    let draft = OnboardingDraft::new();
    assert_eq!(draft.current_step(), 1);
    assert!(!draft.skipped_optional());
}

#[test]
fn next_and_prev_stay_in_bounds() {
    let mut draft = OnboardingDraft::new();
    draft.prev_step();
    assert_eq!(draft.current_step(), 1);
    for _ in 0..10 {
        draft.next_step();
        assert!((1..=TOTAL_STEPS).contains(&draft.current_step()));
    }
    assert_eq!(draft.current_step(), TOTAL_STEPS);
    for _ in 0..10 {
        draft.prev_step();
        assert!((1..=TOTAL_STEPS).contains(&draft.current_step()));
    }
    assert_eq!(draft.current_step(), 1);
}

#[test]
fn set_step_clamps() {
    let mut draft = OnboardingDraft::new();
    draft.set_step(0);
    assert_eq!(draft.current_step(), 1);
    draft.set_step(200);
    assert_eq!(draft.current_step(), TOTAL_STEPS);
    draft.set_step(2);
    assert_eq!(draft.current_step(), 2);
}

#[test]
fn skip_to_end_flags_optional_skip() {
    let mut draft = OnboardingDraft::new();
    draft.skip_to_end();
    assert!(draft.is_last_step());
    assert!(draft.skipped_optional());
}

// =============================================================
// partial updates
// =============================================================

#[test]
fn step_updates_shallow_merge() {
    let mut draft = OnboardingDraft::new();
    draft.update_step1(Step1 { age: Some(20), ..Step1::default() });
    draft.update_step1(Step1 { weight_kg: Some(70.0), ..Step1::default() });
    assert_eq!(draft.step1.age, Some(20));
    assert_eq!(draft.step1.weight_kg, Some(70.0));

    draft.update_step3(Step3Update { allergies: Some(vec!["peanuts".to_owned()]), ..Step3Update::default() });
    assert_eq!(draft.step3.diet_type, DietType::Omnivore);
    assert_eq!(draft.step3.allergies, vec!["peanuts".to_owned()]);

    draft.update_step4(Step4Update { preferred_cuisines: Some(vec!["thai".to_owned()]), ..Step4Update::default() });
    assert!(draft.step4.health_conditions.is_empty());
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_complete_draft_applies_defaults() {
    let profile = complete_draft().validate().expect("complete");
    assert_eq!(profile.age, 34);
    assert_eq!(profile.diet_type, DietType::Omnivore);
    assert!(profile.allergies.is_empty());
    assert!(profile.disliked_foods.is_empty());
    assert!(profile.health_conditions.is_empty());
    assert!(profile.preferred_cuisines.is_empty());
}

#[test]
fn validate_fails_when_any_required_field_missing() {
    let clear: [fn(&mut OnboardingDraft); 6] = [
        |d| d.step1.age = None,
        |d| d.step1.gender = None,
        |d| d.step1.height_cm = None,
        |d| d.step1.weight_kg = None,
        |d| d.step2.activity_level = None,
        |d| d.step2.goal = None,
    ];
    let expected = [
        RequiredField::Age,
        RequiredField::Gender,
        RequiredField::HeightCm,
        RequiredField::WeightKg,
        RequiredField::ActivityLevel,
        RequiredField::Goal,
    ];
    for (clear_field, field) in clear.iter().zip(expected) {
        let mut draft = complete_draft();
        clear_field(&mut draft);
        let err = draft.validate().expect_err("should be incomplete");
        assert_eq!(err.0, vec![field]);
        assert!(draft.full_profile().is_none());
    }
}

#[test]
fn validate_empty_draft_lists_everything_in_order() {
    let err = OnboardingDraft::new().validate().expect_err("empty");
    assert_eq!(err.to_string(), "age, gender, height_cm, weight_kg, activity_level, goal");
    assert_eq!(err.first_step(), 1);
}

#[test]
fn missing_fields_point_at_earliest_step() {
    let mut draft = complete_draft();
    draft.step2.goal = None;
    let err = draft.validate().expect_err("goal missing");
    assert_eq!(err.first_step(), 2);
    assert!(err.contains(RequiredField::Goal));
    assert!(draft.missing_on_step(1).is_empty());
    assert_eq!(draft.missing_on_step(2), vec![RequiredField::Goal]);
}

#[test]
fn skipped_optional_steps_do_not_block_completion() {
    let mut draft = complete_draft();
    draft.skip_to_end();
    assert!(draft.full_profile().is_some());
}

#[test]
fn reset_returns_to_initial_draft() {
    let mut draft = complete_draft();
    draft.update_step3(Step3Update { diet_type: Some(DietType::Vegan), ..Step3Update::default() });
    draft.skip_to_end();
    draft.reset();
    assert_eq!(draft, OnboardingDraft::new());
    assert_eq!(draft.step3.diet_type, DietType::Omnivore);
}

// =============================================================
// editing an existing profile
// =============================================================

fn existing_profile() -> Profile {
    Profile {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        age: 51,
        gender: Gender::Male,
        height_cm: 181.0,
        weight_kg: 90.0,
        activity_level: ActivityLevel::Active,
        goal: Goal::LoseWeight,
        diet_type: DietType::Vegetarian,
        allergies: vec!["nuts".to_owned()],
        disliked_foods: vec!["olives".to_owned()],
        health_conditions: vec!["diabetes".to_owned()],
        preferred_cuisines: vec!["thai".to_owned()],
    }
}

#[test]
fn from_profile_fills_every_step() {
    let draft = OnboardingDraft::from_profile(&existing_profile());
    assert!(draft.is_editing());
    assert_eq!(draft.current_step(), 1);
    assert!(!draft.is_pristine());

    let payload = draft.validate().expect("seeded draft is complete");
    assert_eq!(payload.age, 51);
    assert_eq!(payload.goal, Goal::LoseWeight);
    assert_eq!(payload.diet_type, DietType::Vegetarian);
    assert_eq!(payload.allergies, vec!["nuts".to_owned()]);
    assert_eq!(payload.disliked_foods, vec!["olives".to_owned()]);
    assert_eq!(payload.health_conditions, vec!["diabetes".to_owned()]);
    assert_eq!(payload.preferred_cuisines, vec!["thai".to_owned()]);
}

#[test]
fn new_draft_is_pristine_until_touched() {
    let mut draft = OnboardingDraft::new();
    assert!(draft.is_pristine());
    assert!(!draft.is_editing());
    draft.next_step();
    assert!(!draft.is_pristine());
}

#[test]
fn reset_drops_editing_mode() {
    let mut draft = OnboardingDraft::from_profile(&existing_profile());
    draft.reset();
    assert!(!draft.is_editing());
    assert!(draft.is_pristine());
}

#[test]
fn parse_list_trims_and_drops_blanks() {
    assert_eq!(parse_list(" nuts, , shellfish ,"), vec!["nuts".to_owned(), "shellfish".to_owned()]);
    assert!(parse_list("   ").is_empty());
}
