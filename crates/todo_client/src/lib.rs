//! todo_client - Typed client for the employee user/todo REST endpoints
//!
//! This crate provides the pieces the progress CLI is built from:
//! - `api` - wire models and the HTTP client for the two endpoints
//! - `error` - the client error taxonomy
//! - `report` - progress summary computation and rendering

pub mod api;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use api::client::{TodoApiClient, DEFAULT_BASE_URL};
pub use api::models::{Todo, User, UNKNOWN_NAME};
pub use error::ClientError;
pub use report::ProgressSummary;
