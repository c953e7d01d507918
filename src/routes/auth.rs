use crate::{
    auth::{
        jwt::AuthClaims,
        middleware::UserExtractor,
        password::{hash_password, verify_password},
    },
    database::entities::UserRecord,
    error::AppError,
    server::Server,
};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

pub fn create_auth_routes() -> Router<Server> {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
}

pub fn create_protected_auth_routes() -> Router<Server> {
    Router::new().route("/me", get(me_handler).put(update_name_handler))
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

/// Good-enough structural check; deliverability is the mail server's
/// problem.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

fn issue_token(server: &Server, user: &UserRecord) -> Result<String, AppError> {
    let claims = AuthClaims::new(
        user.id,
        &user.email,
        server.config.jwt.expiry_hours * 3600,
    );
    server.jwt_service.create_token(&claims)
}

async fn signup_handler(
    State(server): State<Server>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let email = request.email.trim().to_lowercase();

    if email.is_empty() || request.password.is_empty() || request.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Email, password, and name are required".to_string(),
        ));
    }
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest("Invalid email format".to_string()));
    }
    if request.password.len() < 6 {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let users = server.database.users();
    if users.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&request.password, server.config.auth.bcrypt_cost)?;
    let user = users
        .create(&UserRecord::new(&email, password_hash, request.name.trim()))
        .await?;

    tracing::info!(user_id = %user.id, "New user registered");

    let token = issue_token(&server, &user)?;
    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

async fn login_handler(
    State(server): State<Server>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = request.email.trim().to_lowercase();

    if email.is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    // The same message covers unknown email and wrong password so the
    // endpoint does not leak which accounts exist.
    let user = server
        .database
        .users()
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(&server, &user)?;
    Ok(Json(AuthResponse { user, token }))
}

async fn me_handler(UserExtractor(user): UserExtractor) -> Json<UserResponse> {
    Json(UserResponse { user })
}

async fn update_name_handler(
    State(server): State<Server>,
    UserExtractor(user): UserExtractor,
    Json(request): Json<UpdateNameRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    let user = server.database.users().update_name(user.id, name).await?;
    Ok(Json(UserResponse { user }))
}
