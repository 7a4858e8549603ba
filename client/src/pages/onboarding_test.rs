use super::*;

#[test]
fn parse_age_accepts_values_in_range() {
    assert_eq!(parse_age(" 34 "), Some(34));
    assert_eq!(parse_age("13"), Some(13));
    assert_eq!(parse_age("120"), Some(120));
}

#[test]
fn parse_age_rejects_out_of_range_and_garbage() {
    assert_eq!(parse_age("12"), None);
    assert_eq!(parse_age("121"), None);
    assert_eq!(parse_age("-5"), None);
    assert_eq!(parse_age("thirty"), None);
    assert_eq!(parse_age(""), None);
}

#[test]
fn parse_measure_accepts_decimal_comma() {
    assert_eq!(parse_measure("72,5", WEIGHT_RANGE_KG), Some(72.5));
    assert_eq!(parse_measure("180", HEIGHT_RANGE_CM), Some(180.0));
}

#[test]
fn parse_measure_rejects_implausible_values() {
    assert_eq!(parse_measure("20", WEIGHT_RANGE_KG), None);
    assert_eq!(parse_measure("NaN", WEIGHT_RANGE_KG), None);
    assert_eq!(parse_measure("inf", HEIGHT_RANGE_CM), None);
}

#[test]
fn option_values_round_trip_through_parse_choice() {
    assert_eq!(option_value(ActivityLevel::VeryActive), "very_active");
    assert_eq!(parse_choice::<ActivityLevel>("very_active"), Some(ActivityLevel::VeryActive));
    assert_eq!(parse_choice::<Gender>("female"), Some(Gender::Female));
    assert_eq!(parse_choice::<Goal>(""), None);
}

#[test]
fn missing_message_uses_readable_labels() {
    assert_eq!(
        missing_message(&[RequiredField::HeightCm, RequiredField::ActivityLevel]),
        "Please fill in: height, activity level."
    );
}

#[test]
fn step_titles_cover_every_screen() {
    assert_eq!(step_title(1), "About you");
    assert_eq!(step_title(2), "Activity and goal");
    assert_eq!(step_title(TOTAL_STEPS), "Food preferences");
}

fn cached_profile() -> Profile {
    Profile {
        id: "p1".to_owned(),
        user_id: "u1".to_owned(),
        age: 29,
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 58.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::GainMuscle,
        diet_type: DietType::Pescatarian,
        allergies: vec!["shellfish".to_owned()],
        disliked_foods: Vec::new(),
        health_conditions: Vec::new(),
        preferred_cuisines: vec!["japanese".to_owned()],
    }
}

#[test]
fn untouched_draft_is_seeded_from_cached_profile() {
    let seeded = seeded_draft(&OnboardingDraft::new(), Some(&cached_profile())).expect("seeded");
    assert!(seeded.is_editing());
    assert_eq!(seeded.step1.age, Some(29));
    assert_eq!(seeded.step2.goal, Some(Goal::GainMuscle));
    assert_eq!(seeded.step3.diet_type, DietType::Pescatarian);
    assert_eq!(seeded.step4.preferred_cuisines, vec!["japanese".to_owned()]);
}

#[test]
fn answers_in_progress_are_never_overwritten() {
    let mut draft = OnboardingDraft::new();
    draft.update_step1(Step1 { age: Some(40), ..Step1::default() });
    assert_eq!(seeded_draft(&draft, Some(&cached_profile())), None);
}

#[test]
fn no_cached_profile_leaves_draft_alone() {
    assert_eq!(seeded_draft(&OnboardingDraft::new(), None), None);
}
