//! Onboarding wizard draft.
//!
//! DESIGN
//! ======
//! The wizard accumulates four partial step records. Steps 1 and 2 carry the
//! required body metrics and goals; steps 3 and 4 are optional preferences
//! with defaults, so they never block completion. [`OnboardingDraft::validate`]
//! is the single completeness check and names every missing field.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ActivityLevel, DietType, Gender, Goal, Profile, ProfileCreate};

/// Number of wizard screens. Steps 3 and 4 share the last screen.
pub const TOTAL_STEPS: u8 = 3;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Step1 {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Step2 {
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step3 {
    pub diet_type: DietType,
    pub allergies: Vec<String>,
    pub disliked_foods: Vec<String>,
}

impl Default for Step3 {
    fn default() -> Self {
        Self { diet_type: DietType::Omnivore, allergies: Vec::new(), disliked_foods: Vec::new() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Step4 {
    pub health_conditions: Vec<String>,
    pub preferred_cuisines: Vec<String>,
}

/// Partial updates; `None` leaves the current value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step3Update {
    pub diet_type: Option<DietType>,
    pub allergies: Option<Vec<String>>,
    pub disliked_foods: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step4Update {
    pub health_conditions: Option<Vec<String>>,
    pub preferred_cuisines: Option<Vec<String>>,
}

/// A required field the draft is still missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Age,
    Gender,
    HeightCm,
    WeightKg,
    ActivityLevel,
    Goal,
}

impl RequiredField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::ActivityLevel => "activity_level",
            Self::Goal => "goal",
        }
    }

    /// Wizard screen that collects this field.
    #[must_use]
    pub fn step(self) -> u8 {
        match self {
            Self::Age | Self::Gender | Self::HeightCm | Self::WeightKg => 1,
            Self::ActivityLevel | Self::Goal => 2,
        }
    }
}

/// Every missing required field, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingFields(pub Vec<RequiredField>);

impl MissingFields {
    /// Earliest wizard screen that needs attention.
    #[must_use]
    pub fn first_step(&self) -> u8 {
        self.0.iter().map(|f| f.step()).min().unwrap_or(1)
    }

    #[must_use]
    pub fn contains(&self, field: RequiredField) -> bool {
        self.0.contains(&field)
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

impl std::error::Error for MissingFields {}

#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingDraft {
    pub step1: Step1,
    pub step2: Step2,
    pub step3: Step3,
    pub step4: Step4,
    current_step: u8,
    skipped_optional: bool,
    editing: bool,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            step1: Step1::default(),
            step2: Step2::default(),
            step3: Step3::default(),
            step4: Step4::default(),
            current_step: 1,
            skipped_optional: false,
            editing: false,
        }
    }
}

impl OnboardingDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing profile, for editing it.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            step1: Step1 {
                age: Some(profile.age),
                gender: Some(profile.gender),
                height_cm: Some(profile.height_cm),
                weight_kg: Some(profile.weight_kg),
            },
            step2: Step2 { activity_level: Some(profile.activity_level), goal: Some(profile.goal) },
            step3: Step3 {
                diet_type: profile.diet_type,
                allergies: profile.allergies.clone(),
                disliked_foods: profile.disliked_foods.clone(),
            },
            step4: Step4 {
                health_conditions: profile.health_conditions.clone(),
                preferred_cuisines: profile.preferred_cuisines.clone(),
            },
            editing: true,
            ..Self::default()
        }
    }

    /// Whether submitting should update an existing profile.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// True until any answer or navigation has touched the draft.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    #[must_use]
    pub fn skipped_optional(&self) -> bool {
        self.skipped_optional
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current_step == TOTAL_STEPS
    }

    /// Jump to `step`, clamped to `1..=TOTAL_STEPS`.
    pub fn set_step(&mut self, step: u8) {
        self.current_step = step.clamp(1, TOTAL_STEPS);
    }

    pub fn next_step(&mut self) {
        self.set_step(self.current_step.saturating_add(1));
    }

    pub fn prev_step(&mut self) {
        self.set_step(self.current_step.saturating_sub(1));
    }

    /// Jump to the last screen, leaving optional answers at their defaults.
    pub fn skip_to_end(&mut self) {
        self.current_step = TOTAL_STEPS;
        self.skipped_optional = true;
    }

    pub fn update_step1(&mut self, update: Step1) {
        merge(&mut self.step1.age, update.age);
        merge(&mut self.step1.gender, update.gender);
        merge(&mut self.step1.height_cm, update.height_cm);
        merge(&mut self.step1.weight_kg, update.weight_kg);
    }

    pub fn update_step2(&mut self, update: Step2) {
        merge(&mut self.step2.activity_level, update.activity_level);
        merge(&mut self.step2.goal, update.goal);
    }

    pub fn update_step3(&mut self, update: Step3Update) {
        if let Some(diet_type) = update.diet_type {
            self.step3.diet_type = diet_type;
        }
        if let Some(allergies) = update.allergies {
            self.step3.allergies = allergies;
        }
        if let Some(disliked) = update.disliked_foods {
            self.step3.disliked_foods = disliked;
        }
    }

    pub fn update_step4(&mut self, update: Step4Update) {
        if let Some(conditions) = update.health_conditions {
            self.step4.health_conditions = conditions;
        }
        if let Some(cuisines) = update.preferred_cuisines {
            self.step4.preferred_cuisines = cuisines;
        }
    }

    /// Missing required fields on a given screen.
    #[must_use]
    pub fn missing_on_step(&self, step: u8) -> Vec<RequiredField> {
        match self.validate() {
            Ok(_) => Vec::new(),
            Err(MissingFields(fields)) => fields.into_iter().filter(|f| f.step() == step).collect(),
        }
    }

    /// Materialize the submission payload or list what is missing.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFields`] naming every absent required field.
    pub fn validate(&self) -> Result<ProfileCreate, MissingFields> {
        let mut missing = Vec::new();
        let age = require(self.step1.age, RequiredField::Age, &mut missing);
        let gender = require(self.step1.gender, RequiredField::Gender, &mut missing);
        let height_cm = require(self.step1.height_cm, RequiredField::HeightCm, &mut missing);
        let weight_kg = require(self.step1.weight_kg, RequiredField::WeightKg, &mut missing);
        let activity_level = require(self.step2.activity_level, RequiredField::ActivityLevel, &mut missing);
        let goal = require(self.step2.goal, RequiredField::Goal, &mut missing);

        match (age, gender, height_cm, weight_kg, activity_level, goal) {
            (Some(age), Some(gender), Some(height_cm), Some(weight_kg), Some(activity_level), Some(goal)) => {
                Ok(ProfileCreate {
                    age,
                    gender,
                    height_cm,
                    weight_kg,
                    activity_level,
                    goal,
                    diet_type: self.step3.diet_type,
                    allergies: self.step3.allergies.clone(),
                    disliked_foods: self.step3.disliked_foods.clone(),
                    health_conditions: self.step4.health_conditions.clone(),
                    preferred_cuisines: self.step4.preferred_cuisines.clone(),
                })
            }
            _ => Err(MissingFields(missing)),
        }
    }

    #[must_use]
    pub fn full_profile(&self) -> Option<ProfileCreate> {
        self.validate().ok()
    }

    /// Back to an empty draft on step 1 with defaults re-applied.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn merge<T>(slot: &mut Option<T>, update: Option<T>) {
    if update.is_some() {
        *slot = update;
    }
}

fn require<T>(value: Option<T>, field: RequiredField, missing: &mut Vec<RequiredField>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

/// Split a comma-separated free-text answer into trimmed, non-empty items.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
