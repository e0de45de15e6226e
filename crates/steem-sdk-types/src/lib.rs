pub mod api_types;
pub mod error;

pub use error::TypesError;
