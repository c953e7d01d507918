use crate::{
    auth::middleware::UserExtractor,
    database::entities::{
        FoodEntryRecord, FoodItemRecord, food_entries::MealType,
    },
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

pub fn create_food_routes() -> Router<Server> {
    Router::new().route(
        "/food/entries",
        get(get_entries_handler)
            .post(add_entry_handler)
            .put(update_entry_handler)
            .delete(delete_entry_handler),
    )
}

#[derive(Debug, Deserialize)]
pub struct FoodEntriesQuery {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Inline definition of a one-off food logged together with its entry
#[derive(Debug, Deserialize)]
pub struct CustomFood {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
}

#[derive(Debug, Deserialize)]
pub struct NewFoodEntryRequest {
    pub food_item_id: Option<i32>,
    pub custom_food: Option<CustomFood>,
    pub servings: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFoodEntryRequest {
    pub id: i32,
    pub servings: Option<f64>,
    pub meal_type: Option<MealType>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteEntryQuery {
    pub id: i32,
}

/// Journal entry with its food item embedded for display
#[derive(Debug, Serialize)]
pub struct FoodEntryView {
    pub id: i32,
    pub food_item_id: i32,
    pub servings: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub created_at: chrono::DateTime<Utc>,
    pub food_item: Option<FoodItemRecord>,
}

impl From<(FoodEntryRecord, Option<FoodItemRecord>)> for FoodEntryView {
    fn from((entry, item): (FoodEntryRecord, Option<FoodItemRecord>)) -> Self {
        Self {
            id: entry.id,
            food_item_id: entry.food_item_id,
            servings: entry.servings,
            meal_type: entry.meal_type,
            date: entry.date,
            created_at: entry.created_at,
            food_item: item,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FoodEntriesResponse {
    pub entries: Vec<FoodEntryView>,
}

#[derive(Debug, Serialize)]
pub struct FoodEntryResponse {
    pub entry: FoodEntryView,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

async fn get_entries_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<FoodEntriesQuery>,
) -> Result<Json<FoodEntriesResponse>, AppError> {
    let food = server.database.food();

    let rows = match (params.start_date, params.end_date) {
        (Some(start), Some(end)) => food.entries_for_range(user.id, start, end).await?,
        _ => {
            let date = params.date.unwrap_or_else(|| Local::now().date_naive());
            food.entries_for_date(user.id, date).await?
        }
    };

    Ok(Json(FoodEntriesResponse {
        entries: rows.into_iter().map(FoodEntryView::from).collect(),
    }))
}

async fn add_entry_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Json(request): Json<NewFoodEntryRequest>,
) -> Result<Json<FoodEntryResponse>, AppError> {
    if request.servings <= 0.0 {
        return Err(AppError::BadRequest("Servings must be positive".to_string()));
    }

    let food = server.database.food();

    // An inline custom food is created first and then referenced like any
    // catalog item.
    let food_item_id = match request.custom_food {
        Some(custom) => {
            let item = food
                .insert_item(&FoodItemRecord {
                    id: 0,
                    user_id: Some(user.id),
                    name: custom.name,
                    calories: custom.calories,
                    protein: custom.protein,
                    carbs: custom.carbs,
                    fat: custom.fat,
                    serving_size: custom.serving_size,
                    is_custom: true,
                    created_at: Utc::now(),
                })
                .await?;
            item.id
        }
        None => request
            .food_item_id
            .ok_or_else(|| AppError::BadRequest("Food item required".to_string()))?,
    };

    let entry = food
        .insert_entry(&FoodEntryRecord {
            id: 0,
            user_id: user.id,
            food_item_id,
            servings: request.servings,
            meal_type: request.meal_type,
            date: request.date,
            created_at: Utc::now(),
        })
        .await?;

    let item = food.find_item(food_item_id).await?;
    Ok(Json(FoodEntryResponse {
        entry: FoodEntryView::from((entry, item)),
    }))
}

async fn update_entry_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Json(request): Json<UpdateFoodEntryRequest>,
) -> Result<Json<FoodEntryResponse>, AppError> {
    if let Some(servings) = request.servings {
        if servings <= 0.0 {
            return Err(AppError::BadRequest("Servings must be positive".to_string()));
        }
    }

    let food = server.database.food();
    let updated = food
        .update_entry(user.id, request.id, request.servings, request.meal_type)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".to_string()))?;

    let item = food.find_item(updated.food_item_id).await?;
    Ok(Json(FoodEntryResponse {
        entry: FoodEntryView::from((updated, item)),
    }))
}

async fn delete_entry_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Query(params): Query<DeleteEntryQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    server.database.food().delete_entry(user.id, params.id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
