pub mod activity;
pub mod calories;

pub use activity::Activity;
pub use calories::{compute, CalorieRequest, CalorieResult, ValidationError};
