pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod observability;

pub use app::MenuBoard;
pub use error::AppError;
