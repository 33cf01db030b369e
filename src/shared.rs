pub mod emit;
pub mod error;
pub mod events;
pub mod settings;
pub mod types;

#[cfg(test)]
mod types_test;

// Re-export the error types for convenience
pub use error::{AppError, AppResult};
