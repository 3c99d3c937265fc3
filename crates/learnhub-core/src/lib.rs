//! # LearnHub Core
//!
//! Core types shared by every LearnHub crate:
//!
//! - [`errors`]: [`AppError`], the handler error type, rendered as the API envelope
//! - [`response`]: [`ApiResponse`], the `{success, data?, error?, message?}` envelope
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use learnhub_core::{ApiResponse, AppError};
//!
//! async fn handler() -> Result<Json<ApiResponse<Profile>>, AppError> {
//!     let profile = load_profile().await?;
//!     Ok(Json(ApiResponse::ok(profile)))
//! }
//! ```

pub mod errors;
pub mod password;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use response::ApiResponse;
