//! Store service

use serde_json::Value;

use crate::error::Result;
use crate::gateway::{Gateway, NO_PARAMS};
use crate::models::StoreItemToPantry;

/// Grocery stores and their catalogues
#[derive(Clone)]
pub struct StoreService {
    gateway: Gateway,
}

impl StoreService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn all(&self) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.stores;
        self.gateway.get(endpoint, NO_PARAMS).await?.into_json()
    }

    pub async fn items(&self, store_id: &str) -> Result<Value> {
        let endpoint = self.gateway.config().endpoints.store_items(store_id);
        self.gateway.get(&endpoint, NO_PARAMS).await?.into_json()
    }

    /// Copy a store item into the pantry
    pub async fn add_to_pantry(&self, store_item_id: &str, quantity: u32) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.pantry_items;
        let body = StoreItemToPantry {
            store_item_id,
            quantity,
        };
        self.gateway.post(endpoint, &body).await?.into_json()
    }
}
