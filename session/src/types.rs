//! Wire DTOs exchanged with the nutrition API.
//!
//! DESIGN
//! ======
//! Field names and enum spellings mirror the server's JSON so serde round-trips
//! stay lossless. Enums serialize as snake_case strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    /// Preferred UI language (primary subtag, e.g. `"en"`), if the user set one.
    #[serde(default)]
    pub language: Option<String>,
}

/// Access/refresh token pair issued by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Registration {
    /// Credentials used for the automatic login after registering.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Partial update for `PATCH /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Lightweight profile status used for routing decisions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub has_profile: bool,
    #[serde(default)]
    pub is_complete: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Self-reported weekly activity, ordered from least to most active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [Self; 5] = [Self::Sedentary, Self::Light, Self::Moderate, Self::Active, Self::VeryActive];

    /// Multiplier applied to basal metabolic rate to estimate daily expenditure.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Light => "Lightly active",
            Self::Moderate => "Moderately active",
            Self::Active => "Active",
            Self::VeryActive => "Very active",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    Maintain,
    GainMuscle,
}

impl Goal {
    pub const ALL: [Self; 3] = [Self::LoseWeight, Self::Maintain, Self::GainMuscle];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose weight",
            Self::Maintain => "Maintain weight",
            Self::GainMuscle => "Gain muscle",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
    Paleo,
}

impl DietType {
    pub const ALL: [Self; 6] =
        [Self::Omnivore, Self::Vegetarian, Self::Vegan, Self::Pescatarian, Self::Keto, Self::Paleo];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Omnivore => "Omnivore",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Pescatarian => "Pescatarian",
            Self::Keto => "Keto",
            Self::Paleo => "Paleo",
        }
    }
}

/// Submission payload for `POST /profiles`, produced by a validated onboarding draft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileCreate {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_type: DietType,
    pub allergies: Vec<String>,
    pub disliked_foods: Vec<String>,
    pub health_conditions: Vec<String>,
    pub preferred_cuisines: Vec<String>,
}

/// A stored profile as returned by `GET /profiles/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub disliked_foods: Vec<String>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
}
