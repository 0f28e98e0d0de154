//! Recipe service

use serde_json::Value;

use crate::error::Result;
use crate::gateway::{Gateway, NO_PARAMS};
use crate::models::CommentRequest;

/// Recipe listing, lookup, search and comments
#[derive(Clone)]
pub struct RecipeService {
    gateway: Gateway,
}

impl RecipeService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Every public recipe
    pub async fn all(&self) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.recipes;
        self.gateway.get(endpoint, NO_PARAMS).await?.into_json()
    }

    /// Recipes owned by the logged-in user
    pub async fn mine(&self) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.user_recipes;
        self.gateway.get(endpoint, NO_PARAMS).await?.into_json()
    }

    pub async fn by_id(&self, id: &str) -> Result<Value> {
        let endpoint = self.gateway.config().endpoints.recipe(id);
        self.gateway.get(&endpoint, NO_PARAMS).await?.into_json()
    }

    /// Full-text search, sent as `?q=<query>`
    pub async fn search(&self, query: &str) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.search_recipes;
        self.gateway.get(endpoint, [("q", query)]).await?.into_json()
    }

    /// Rate and comment on a recipe
    pub async fn add_comment(&self, recipe_id: &str, rating: u8, comment: &str) -> Result<Value> {
        let endpoint = &self.gateway.config().endpoints.comments;
        let body = CommentRequest {
            recipe_id,
            rating,
            comment,
        };
        self.gateway.post(endpoint, &body).await?.into_json()
    }
}
