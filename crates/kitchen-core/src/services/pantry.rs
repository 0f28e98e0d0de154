//! Pantry service

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::gateway::{Gateway, NO_PARAMS};
use crate::models::QuantityUpdate;

/// The logged-in user's pantry
#[derive(Clone)]
pub struct PantryService {
    gateway: Gateway,
}

impl PantryService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn items(&self) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.pantry_items;
        self.gateway.get(endpoint, NO_PARAMS).await?.into_json()
    }

    /// Add an item; the payload shape belongs to the backend
    pub async fn add_item<B>(&self, item: &B) -> Result<Value>
    where
        B: Serialize + ?Sized + Sync,
    {
        let endpoint = &self.gateway.config().endpoints.pantry_items;
        self.gateway.post(endpoint, item).await?.into_json()
    }

    pub async fn remove_item(&self, item_id: &str) -> Result<Value> {
        let endpoint = self.gateway.config().endpoints.pantry_item(item_id);
        self.gateway.delete(&endpoint).await?.into_json()
    }

    pub async fn update_quantity(&self, item_id: &str, quantity: u32) -> Result<Value> {
        let endpoint = self.gateway.config().endpoints.pantry_item(item_id);
        self.gateway
            .put(&endpoint, &QuantityUpdate { quantity })
            .await?
            .into_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_gateway, MockTransport};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_items_and_add_item() {
        let (gateway, transport, _session) = mock_gateway(
            MockTransport::new()
                .respond_json(200, json!([{"name": "flour"}]))
                .respond_json(201, json!({"id": 3, "name": "sugar"})),
        );
        let pantry = PantryService::new(gateway);

        let items = pantry.items().await.unwrap();
        assert_eq!(items, json!([{"name": "flour"}]));

        pantry.add_item(&json!({"name": "sugar", "quantity": 1})).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url.path(), "/api/pantry/items");
        assert_eq!(requests[1].method, Method::POST);
        assert_eq!(requests[1].url.path(), "/api/pantry/items");
    }

    #[tokio::test]
    async fn test_remove_and_update_target_item_path() {
        let (gateway, transport, _session) = mock_gateway(
            MockTransport::new()
                .respond_json(200, json!({"ok": true}))
                .respond_json(200, json!({"id": 7, "quantity": 4})),
        );
        let pantry = PantryService::new(gateway);

        pantry.remove_item("7").await.unwrap();
        pantry.update_quantity("7", 4).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].url.path(), "/api/pantry/items/7");
        assert_eq!(requests[1].method, Method::PUT);
        let body: Value = serde_json::from_slice(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"quantity": 4}));
    }
}
