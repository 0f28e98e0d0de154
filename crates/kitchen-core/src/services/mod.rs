//! Feature services
//!
//! Thin wrappers that name the backend's recipe, pantry and store endpoints.
//! They add no policy of their own: every call goes through the gateway and
//! every failure reaches the caller unchanged.

pub mod pantry;
pub mod recipes;
pub mod stores;

pub use pantry::PantryService;
pub use recipes::RecipeService;
pub use stores::StoreService;
