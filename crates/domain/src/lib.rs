pub mod category;
pub mod error;
pub mod product;

pub use category::{Category, CategoryDto, CategoryRepository, CategoryStore};
pub use error::{DomainError, ErrorKind};
pub use product::{Product, ProductDto, ProductRepository, ProductStore};
