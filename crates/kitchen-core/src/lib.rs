//! # kitchen-core
//!
//! Unified request/session layer for the Kitchen recipe, pantry and store API.
//!
//! This crate provides:
//! - Durable bearer-token session (`session` module)
//! - The single network gateway every API call goes through (`gateway` module)
//! - Login, signup, logout and the auth guard (`auth` module)
//! - Recipe, pantry and store wrappers over the gateway (`services` module)
//! - Environment and endpoint configuration (`config` module)
//! - Unified error handling (`error` module)

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod services;
pub mod session;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use auth::{session_token, AuthController, Navigator, NoopNavigator};
pub use config::{ApiConfig, Endpoints, Environment};
pub use error::{Error, Result};
pub use gateway::{ApiResponse, Gateway, RawResponse, ReqwestTransport, Transport, NO_PARAMS};
pub use models::{AuthState, User};
pub use services::{PantryService, RecipeService, StoreService};
pub use session::{FileStorage, KeyValueStorage, MemoryStorage, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
