use crate::{
    auth::{
        jwt::{JwtService, JwtServiceImpl},
        middleware::jwt_auth_middleware,
    },
    config::Config,
    database::{DatabaseManager, DatabaseManagerImpl},
    error::AppError,
    health::HealthService,
    routes::{
        create_auth_routes, create_exercise_routes, create_food_routes, create_health_routes,
        create_history_routes, create_profile_routes, create_protected_auth_routes,
        create_weight_routes,
    },
    shutdown::ShutdownCoordinator,
};
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(Clone)]
pub struct Server {
    pub config: Arc<Config>,
    pub jwt_service: Arc<dyn JwtService>,
    pub database: Arc<dyn DatabaseManager>,
    pub health_service: Arc<HealthService>,
    pub shutdown_coordinator: Arc<ShutdownCoordinator>,
}

impl Server {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let jwt_service_impl = JwtServiceImpl::new(&config.jwt.secret);
        let jwt_service: Arc<dyn JwtService> = Arc::new(jwt_service_impl.clone());

        let database_impl = Arc::new(
            DatabaseManagerImpl::new_from_config(&config)
                .await
                .map_err(AppError::Database)?,
        );
        let database: Arc<dyn DatabaseManager> = database_impl.clone();

        let health_service = Arc::new(HealthService::new());
        health_service.register(database_impl).await;
        health_service
            .register(jwt_service_impl.health_checker())
            .await;

        let shutdown_coordinator = Arc::new(ShutdownCoordinator::new());

        Ok(Self {
            config: Arc::new(config),
            jwt_service,
            database,
            health_service,
            shutdown_coordinator,
        })
    }

    pub async fn run(&self) -> Result<(), AppError> {
        // Run database migrations on startup to ensure tables exist
        self.database.migrate().await.map_err(AppError::Database)?;

        let app = self.create_app();

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

        info!("Server listening on http://{}", addr);

        // Spawn shutdown signal handler
        let shutdown_coordinator = self.shutdown_coordinator.clone();
        tokio::spawn(async move {
            shutdown_coordinator.wait_for_shutdown_signal().await;
        });

        let mut shutdown_rx = self.shutdown_coordinator.subscribe();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
                info!("Graceful shutdown initiated");
            })
            .await
            .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }

    // Creates an application router
    pub fn create_app(&self) -> Router {
        let mut app = Router::new()
            // Signup and login
            .nest("/auth", create_auth_routes())
            .nest("/auth", self.protected_auth_routes())
            // Health check routes
            .nest("/health", create_health_routes())
            // Journal and summary API
            .nest("/api", self.api_routes())
            // The browser client runs on another origin
            .layer(CorsLayer::permissive())
            // All routes use Server as state
            .with_state(self.clone());

        if self.config.logging.log_requests {
            app = app.layer(middleware::from_fn(request_logger));
        }
        app
    }

    /// Helper method for protected auth routes
    fn protected_auth_routes(&self) -> Router<Server> {
        create_protected_auth_routes().layer(middleware::from_fn_with_state(
            self.clone(),
            jwt_auth_middleware,
        ))
    }

    /// Helper method for the authenticated journal API
    fn api_routes(&self) -> Router<Server> {
        create_profile_routes()
            .merge(create_food_routes())
            .merge(create_exercise_routes())
            .merge(create_weight_routes())
            .merge(create_history_routes())
            .layer(middleware::from_fn_with_state(
                self.clone(),
                jwt_auth_middleware,
            ))
    }
}

/// Request/response logging middleware for API routes
async fn request_logger(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let is_api_route =
        path.starts_with("/auth") || path.starts_with("/api") || path.starts_with("/health");

    if !is_api_route {
        return next.run(req).await;
    }

    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        latency_ms = %duration.as_millis(),
        "API request"
    );

    response
}
