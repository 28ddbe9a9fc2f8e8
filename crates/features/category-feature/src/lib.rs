pub mod error;
pub mod service;

pub use error::CategoryFeatureError;
pub use service::{CategoryManager, CategoryService};
