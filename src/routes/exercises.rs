use crate::{
    auth::middleware::UserExtractor,
    database::entities::{ExerciseEntry, exercises::ExerciseType},
    error::AppError,
    server::Server,
};
use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub fn create_exercise_routes() -> Router<Server> {
    Router::new().route(
        "/exercises",
        get(get_exercises_handler)
            .post(add_exercise_handler)
            .delete(delete_exercise_handler),
    )
}

#[derive(Debug, Deserialize)]
pub struct ExercisesQuery {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct NewExerciseRequest {
    pub name: String,
    pub exercise_type: ExerciseType,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteExerciseQuery {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct ExercisesResponse {
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub exercise: ExerciseEntry,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

async fn get_exercises_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<ExercisesQuery>,
) -> Result<Json<ExercisesResponse>, AppError> {
    let dao = server.database.exercises();

    let exercises = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => dao.for_range(user.id, start, end).await?,
        _ => {
            let date = params.date.unwrap_or_else(|| Local::now().date_naive());
            dao.for_date(user.id, date).await?
        }
    };

    Ok(Json(ExercisesResponse { exercises }))
}

async fn add_exercise_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Json(request): Json<NewExerciseRequest>,
) -> Result<Json<ExerciseResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if request.duration_minutes < 0 || request.calories_burned < 0 {
        return Err(AppError::BadRequest(
            "Duration and calories burned cannot be negative".to_string(),
        ));
    }

    let exercise = server
        .database
        .exercises()
        .insert(&ExerciseEntry {
            id: 0,
            user_id: user.id,
            name: request.name.trim().to_string(),
            exercise_type: request.exercise_type,
            duration_minutes: request.duration_minutes,
            calories_burned: request.calories_burned,
            date: request.date,
            notes: request.notes,
            created_at: Utc::now(),
        })
        .await?;

    Ok(Json(ExerciseResponse { exercise }))
}

async fn delete_exercise_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<DeleteExerciseQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    server
        .database
        .exercises()
        .delete(user.id, params.id)
        .await?;
    Ok(Json(DeleteResponse { success: true }))
}
