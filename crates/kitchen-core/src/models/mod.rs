//! Data models shared by the session store, gateway and auth flows

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User record as returned by the backend
///
/// The shape is owned by the server; the client only requires valid JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Value);

impl User {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Display name, when the record carries one
    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Signup request body
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Recipe comment body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest<'a> {
    pub recipe_id: &'a str,
    pub rating: u8,
    pub comment: &'a str,
}

/// Pantry entry created from a store item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreItemToPantry<'a> {
    pub store_item_id: &'a str,
    pub quantity: u32,
}

/// Pantry quantity update body
#[derive(Debug, Clone, Serialize)]
pub struct QuantityUpdate {
    pub quantity: u32,
}

/// Authentication state derived from the session store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}
