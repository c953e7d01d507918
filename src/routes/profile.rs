use crate::{
    auth::middleware::UserExtractor,
    database::entities::{
        ProfileRecord,
        user_profiles::{ActivityLevel, Gender, Goal, UnitSystem},
    },
    error::AppError,
    goals::{DailyGoals, daily_goals},
    server::Server,
};
use axum::{
    Router,
    extract::State,
    response::Json,
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub fn create_profile_routes() -> Router<Server> {
    Router::new().route("/profile", get(get_profile_handler).put(update_profile_handler))
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub age: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub target_weight: Option<f64>,
    pub unit_system: Option<UnitSystem>,
    pub use_custom_macros: Option<bool>,
    pub custom_calories: Option<i32>,
    pub custom_protein: Option<i32>,
    pub custom_carbs: Option<i32>,
    pub custom_fat: Option<i32>,
}

/// Profile plus the targets derived from it; both null before the first
/// save.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<ProfileRecord>,
    pub daily_goals: Option<DailyGoals>,
}

async fn get_profile_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = server.database.profiles().find_by_user(user.id).await?;
    let goals = profile.as_ref().map(daily_goals);

    Ok(Json(ProfileResponse {
        profile,
        daily_goals: goals,
    }))
}

async fn update_profile_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if request.age <= 0 {
        return Err(AppError::BadRequest("Age must be positive".to_string()));
    }
    if request.height_cm <= 0.0 || request.weight_kg <= 0.0 {
        return Err(AppError::BadRequest(
            "Height and weight must be positive".to_string(),
        ));
    }
    if let Some(target) = request.target_weight {
        if target <= 0.0 {
            return Err(AppError::BadRequest(
                "Target weight must be positive".to_string(),
            ));
        }
    }

    let profile = ProfileRecord {
        id: 0, // Will be auto-assigned by database
        user_id: user.id,
        age: request.age,
        gender: request.gender,
        height_cm: request.height_cm,
        weight_kg: request.weight_kg,
        activity_level: request.activity_level,
        goal: request.goal,
        target_weight: request.target_weight,
        unit_system: request.unit_system.unwrap_or_default(),
        use_custom_macros: request.use_custom_macros.unwrap_or(false),
        custom_calories: request.custom_calories.unwrap_or(0),
        custom_protein: request.custom_protein.unwrap_or(0),
        custom_carbs: request.custom_carbs.unwrap_or(0),
        custom_fat: request.custom_fat.unwrap_or(0),
        updated_at: Utc::now(),
    };

    let saved = server.database.profiles().upsert(&profile).await?;
    let goals = daily_goals(&saved);

    Ok(Json(ProfileResponse {
        profile: Some(saved),
        daily_goals: Some(goals),
    }))
}
