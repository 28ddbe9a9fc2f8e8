pub mod error;
pub mod service;

pub use error::ProductFeatureError;
pub use service::{ProductManager, ProductService};
