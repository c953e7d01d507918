pub mod exercises;
pub mod food_entries;
pub mod food_items;
pub mod user_profiles;
pub mod users;
pub mod weight_entries;

pub use exercises::Entity as Exercises;
pub use food_entries::Entity as FoodEntries;
pub use food_items::Entity as FoodItems;
pub use user_profiles::Entity as UserProfiles;
pub use users::Entity as Users;
pub use weight_entries::Entity as WeightEntries;

// Type aliases
pub type UserRecord = users::Model;
pub type ProfileRecord = user_profiles::Model;
pub type FoodItemRecord = food_items::Model;
pub type FoodEntryRecord = food_entries::Model;
pub type ExerciseEntry = exercises::Model;
pub type WeightEntry = weight_entries::Model;
