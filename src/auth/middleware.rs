use crate::database::DatabaseManager;
use crate::database::entities::UserRecord;
use crate::error::AppError;
use crate::server::Server;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{trace, warn};

/// JWT authentication middleware. Verifies the bearer token's signature
/// and expiry, resolves the user record, and makes both available to
/// downstream handlers through request extensions.
pub async fn jwt_auth_middleware(
    State(server): State<Server>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return Err(AppError::Unauthorized(
            "Invalid Authorization format".to_string(),
        ));
    };

    let claims = server.jwt_service.validate_token(token)?;

    let user = get_user_record(claims.sub, &server.database).await?;

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

async fn get_user_record(
    user_id: i32,
    database: &Arc<dyn DatabaseManager>,
) -> Result<UserRecord, AppError> {
    let user = database
        .users()
        .find_by_id(user_id)
        .await
        .map_err(|e| AppError::Internal(format!("Database error: {}", e)))?
        .ok_or_else(|| {
            warn!(user_id = %user_id, "Token subject not found");
            AppError::Unauthorized("User not found".to_string())
        })?;

    trace!(user_id = %user.id, email = %user.email, "User authentication successful");
    Ok(user)
}

/// Custom extractor for UserRecord from request extensions
/// Use this in route handlers that need access to authenticated user information
pub struct UserExtractor(pub UserRecord);

impl<S> FromRequestParts<S> for UserExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserRecord>()
            .cloned()
            .map(UserExtractor)
            .ok_or_else(|| AppError::Unauthorized("Missing user authentication".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::AuthClaims;
    use crate::test_utils::TestServerBuilder;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "success"
    }

    async fn create_test_server() -> Server {
        TestServerBuilder::new().build().await
    }

    async fn create_test_user(server: &Server, email: &str) -> i32 {
        let hash = crate::auth::password::hash_password("secret1", 4).unwrap();
        let user = UserRecord::new(email, hash, "Test User");
        server.database.users().create(&user).await.unwrap().id
    }

    fn create_test_token(server: &Server, user_id: i32) -> String {
        let claims = AuthClaims::new(user_id, "test@example.com", 3600);
        server.jwt_service.create_token(&claims).unwrap()
    }

    fn auth_test_app(server: Server) -> Router {
        Router::new()
            .route("/test", get(test_handler))
            .layer(middleware::from_fn_with_state(server, jwt_auth_middleware))
    }

    #[tokio::test]
    async fn test_middleware_accepts_valid_token() {
        let server = create_test_server().await;
        let user_id = create_test_user(&server, "test@example.com").await;
        let token = create_test_token(&server, user_id);
        let app = auth_test_app(server);

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_middleware_missing_header() {
        let server = create_test_server().await;
        let app = auth_test_app(server);

        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_invalid_format() {
        let server = create_test_server().await;
        let app = auth_test_app(server);

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", "Invalid token")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_invalid_token() {
        let server = create_test_server().await;
        let app = auth_test_app(server);

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", "Bearer invalid.jwt.token")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_expired_token() {
        let server = create_test_server().await;
        let user_id = create_test_user(&server, "test@example.com").await;

        let mut claims = AuthClaims::new(user_id, "test@example.com", 3600);
        claims.exp = (claims.iat as i64 - 3600) as usize; // Set to past
        let token = server.jwt_service.create_token(&claims).unwrap();
        let app = auth_test_app(server);

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_unknown_subject() {
        let server = create_test_server().await;
        let token = create_test_token(&server, 999);
        let app = auth_test_app(server);

        let request = Request::builder()
            .uri("/test")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
