use crate::{
    auth::middleware::UserExtractor,
    error::AppError,
    rollup::{self, ExerciseRecord, NutritionRecord, WeightSample, Window, WindowResult},
    server::Server,
};
use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub fn create_history_routes() -> Router<Server> {
    Router::new().route("/history", get(history_handler))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "type")]
    pub window_type: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    #[serde(rename = "type")]
    pub window_type: String,
    #[serde(flatten)]
    pub window: WindowResult,
}

/// Aggregated week/month view: fetch the three per-user record sets for
/// the window, then roll them up into one summary per calendar day.
async fn history_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let window_type = params.window_type.unwrap_or_else(|| "week".to_string());
    let pivot = params.date.unwrap_or_else(|| Local::now().date_naive());

    let window = match window_type.as_str() {
        "week" => Window::week_of(pivot),
        "month" => Window::month_of(pivot),
        _ => {
            return Err(AppError::BadRequest(
                "Invalid type. Use \"week\" or \"month\"".to_string(),
            ));
        }
    };

    let nutrition: Vec<NutritionRecord> = server
        .database
        .food()
        .nutrition_for_range(user.id, window.start, window.end)
        .await?
        .into_iter()
        .map(|row| NutritionRecord {
            date: row.date,
            servings: row.servings,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
        })
        .collect();

    let exercise: Vec<ExerciseRecord> = server
        .database
        .exercises()
        .for_range(user.id, window.start, window.end)
        .await?
        .into_iter()
        .map(|entry| ExerciseRecord {
            date: entry.date,
            calories_burned: entry.calories_burned,
            duration_minutes: entry.duration_minutes,
        })
        .collect();

    let weights: Vec<WeightSample> = server
        .database
        .weight()
        .for_range(user.id, window.start, window.end)
        .await?
        .into_iter()
        .map(|entry| WeightSample {
            date: entry.date,
            weight_kg: entry.weight_kg,
        })
        .collect();

    let window = rollup::aggregate(window.start, window.end, &nutrition, &exercise, &weights);

    Ok(Json(HistoryResponse {
        window_type,
        window,
    }))
}
