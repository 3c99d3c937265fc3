//! # LearnHub Config
//!
//! Configuration types for the LearnHub API, loaded from environment variables:
//!
//! - [`jwt`]: session token signing secret and lifetime
//! - [`cookie`]: session cookie security attributes
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: bind address and static frontend directory
//!
//! # Example
//!
//! ```ignore
//! use learnhub_config::{CookieConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?; // fails closed without JWT_SECRET
//! let cookie_config = CookieConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cookie;
pub mod cors;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cookie::CookieConfig;
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
