use crate::{
    auth::middleware::UserExtractor,
    database::entities::WeightEntry,
    error::AppError,
    server::Server,
};
use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub fn create_weight_routes() -> Router<Server> {
    Router::new().route(
        "/weight",
        get(get_weight_handler)
            .post(add_weight_handler)
            .delete(delete_weight_handler),
    )
}

#[derive(Debug, Deserialize)]
pub struct WeightQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct NewWeightRequest {
    pub weight_kg: f64,
    pub date: NaiveDate,
    pub notes: Option<String>,
    /// When set, the measurement is also copied onto the user's profile.
    pub update_profile: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteWeightQuery {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct WeightEntriesResponse {
    pub entries: Vec<WeightEntry>,
}

#[derive(Debug, Serialize)]
pub struct WeightEntryResponse {
    pub entry: WeightEntry,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

async fn get_weight_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<WeightQuery>,
) -> Result<Json<WeightEntriesResponse>, AppError> {
    let range = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };
    let limit = params.limit.unwrap_or(30);

    let entries = server
        .database
        .weight()
        .history(user.id, range, limit)
        .await?;

    Ok(Json(WeightEntriesResponse { entries }))
}

async fn add_weight_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Json(request): Json<NewWeightRequest>,
) -> Result<Json<WeightEntryResponse>, AppError> {
    if request.weight_kg <= 0.0 {
        return Err(AppError::BadRequest("Weight must be positive".to_string()));
    }

    let entry = server
        .database
        .weight()
        .insert(&WeightEntry {
            id: 0,
            user_id: user.id,
            weight_kg: request.weight_kg,
            date: request.date,
            notes: request.notes,
            created_at: Utc::now(),
        })
        .await?;

    if request.update_profile.unwrap_or(false) {
        server
            .database
            .profiles()
            .update_weight(user.id, request.weight_kg)
            .await?;
    }

    Ok(Json(WeightEntryResponse { entry }))
}

async fn delete_weight_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<DeleteWeightQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    server.database.weight().delete(user.id, params.id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
