//! Daily calorie and macro targets plus coach tips for the dashboard.
//!
//! Energy expenditure uses the Mifflin-St Jeor equation scaled by an activity
//! multiplier, then shifted for the user's goal.

#[cfg(test)]
#[path = "targets_test.rs"]
mod targets_test;

use crate::types::{ActivityLevel, DietType, Gender, Goal, Profile};

/// Lowest calorie target ever suggested.
pub const MIN_CALORIES: u32 = 1200;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;
const FAT_SHARE: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyTargets {
    pub bmr: u32,
    pub tdee: u32,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Basal metabolic rate in kcal/day.
#[must_use]
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
        Gender::Other => -78.0,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + offset
}

fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => -500.0,
        Goal::Maintain => 0.0,
        Goal::GainMuscle => 300.0,
    }
}

fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::Maintain => 1.6,
        Goal::LoseWeight | Goal::GainMuscle => 2.0,
    }
}

#[must_use]
pub fn daily_targets(profile: &Profile) -> DailyTargets {
    let bmr = bmr(profile.gender, profile.weight_kg, profile.height_cm, profile.age);
    let tdee = bmr * profile.activity_level.multiplier();
    let calories = (tdee + goal_adjustment(profile.goal)).max(f64::from(MIN_CALORIES));

    let protein_g = profile.weight_kg * protein_per_kg(profile.goal);
    let fat_g = calories * FAT_SHARE / KCAL_PER_G_FAT;
    let carbs_g = ((calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS).max(0.0);

    DailyTargets {
        bmr: whole(bmr),
        tdee: whole(tdee),
        calories: whole(calories),
        protein_g: whole(protein_g),
        carbs_g: whole(carbs_g),
        fat_g: whole(fat_g),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Up to three short tips picked from goal, activity and diet.
#[must_use]
pub fn coach_tips(profile: &Profile) -> Vec<&'static str> {
    let mut tips = Vec::with_capacity(3);
    tips.push(match profile.goal {
        Goal::LoseWeight => "Fill half your plate with vegetables to stay full on fewer calories.",
        Goal::Maintain => "Keep portions consistent and weigh in weekly to catch drift early.",
        Goal::GainMuscle => "Spread protein across 4 meals and train each muscle twice a week.",
    });
    tips.push(match profile.activity_level {
        ActivityLevel::Sedentary | ActivityLevel::Light => "A 20-minute walk after dinner helps blood sugar and adds up.",
        ActivityLevel::Moderate => "Refuel with carbs and protein within two hours of training.",
        ActivityLevel::Active | ActivityLevel::VeryActive => {
            "High training load: drink water through the day, not only at workouts."
        }
    });
    match profile.diet_type {
        DietType::Vegan | DietType::Vegetarian => {
            tips.push("Pair legumes with grains and consider a B12 supplement.");
        }
        DietType::Keto => tips.push("Watch electrolytes: add salt, leafy greens and avocado."),
        DietType::Pescatarian => tips.push("Aim for two servings of oily fish a week."),
        DietType::Omnivore | DietType::Paleo => {}
    }
    tips
}
