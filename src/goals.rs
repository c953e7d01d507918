//! Daily calorie and macro targets derived from a user's profile.

use crate::database::entities::ProfileRecord;
use crate::database::entities::user_profiles::Gender;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyGoals {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

/// Basal metabolic rate via the Mifflin-St Jeor equation.
pub fn bmr(profile: &ProfileRecord) -> f64 {
    let base =
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by activity level.
pub fn tdee(profile: &ProfileRecord) -> i32 {
    (bmr(profile) * profile.activity_level.multiplier()).round() as i32
}

/// Calorie and macro targets for one day. Custom macros take precedence
/// when the profile enables them; otherwise targets derive from TDEE and
/// the goal's calorie adjustment with a 30/40/30 protein/carbs/fat split.
pub fn daily_goals(profile: &ProfileRecord) -> DailyGoals {
    if profile.use_custom_macros {
        return DailyGoals {
            calories: profile.custom_calories,
            protein: profile.custom_protein,
            carbs: profile.custom_carbs,
            fat: profile.custom_fat,
        };
    }

    let calories = tdee(profile) + profile.goal.calorie_delta();
    let calories_f = f64::from(calories);
    DailyGoals {
        calories,
        protein: (calories_f * 0.3 / 4.0).round() as i32, // 4 kcal per gram
        carbs: (calories_f * 0.4 / 4.0).round() as i32,
        fat: (calories_f * 0.3 / 9.0).round() as i32, // 9 kcal per gram
    }
}
