pub mod errors;
pub mod types;

pub use errors::{AutoHeightError, ConfigError};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, AutoHeightError>;
