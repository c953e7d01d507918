pub mod exercises;
pub mod food;
pub mod profiles;
pub mod users;
pub mod weight;

pub use exercises::ExercisesDao;
pub use food::{FoodDao, NutritionRow};
pub use profiles::ProfilesDao;
pub use users::UsersDao;
pub use weight::WeightDao;
