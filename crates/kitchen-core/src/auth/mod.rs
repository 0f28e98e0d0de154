//! Auth module - login/signup/logout flows and the auth guard
//!
//! ## Structure
//! - `controller.rs` - [`AuthController`], the only writer of the session store
//! - `navigator.rs` - [`Navigator`] hook that receives "go to login" signals

pub mod controller;
pub mod navigator;


pub use controller::{session_token, AuthController};
pub use navigator::{Navigator, NoopNavigator};
