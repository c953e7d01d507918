pub mod auth;
pub mod exercises;
pub mod food;
pub mod health;
pub mod history;
pub mod profile;
pub mod weight;

pub use auth::{create_auth_routes, create_protected_auth_routes};
pub use exercises::create_exercise_routes;
pub use food::create_food_routes;
pub use health::create_health_routes;
pub use history::create_history_routes;
pub use profile::create_profile_routes;
pub use weight::create_weight_routes;
