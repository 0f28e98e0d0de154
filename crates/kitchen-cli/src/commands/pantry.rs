//! Pantry commands
//!
//! Every pantry call belongs to the logged-in user.

use anyhow::{Context as _, Result};
use clap::Subcommand;
use kitchen_core::PantryService;
use serde_json::Value;

use crate::output::{print_json, print_success};
use super::Context;

#[derive(Subcommand)]
pub enum PantryAction {
    /// List pantry items
    List,

    /// Add an item, given as a JSON object
    Add {
        /// Item JSON, e.g. '{"name": "flour", "quantity": 2}'
        item: String,
    },

    /// Remove an item
    Remove { id: String },

    /// Set an item's quantity
    Update { id: String, quantity: u32 },
}

pub async fn execute(ctx: &Context, action: PantryAction) -> Result<()> {
    ctx.require_auth()?;
    let pantry = PantryService::new(ctx.gateway().clone());

    match action {
        PantryAction::List => print_json(&pantry.items().await?),
        PantryAction::Add { item } => {
            let item: Value = serde_json::from_str(&item).context("Item must be valid JSON")?;
            let created = pantry.add_item(&item).await?;
            print_success("Added to pantry", ctx.quiet);
            print_json(&created)
        }
        PantryAction::Remove { id } => {
            pantry.remove_item(&id).await?;
            print_success(&format!("Removed pantry item {}", id), ctx.quiet);
            Ok(())
        }
        PantryAction::Update { id, quantity } => {
            let updated = pantry.update_quantity(&id, quantity).await?;
            print_success(&format!("Pantry item {} set to {}", id, quantity), ctx.quiet);
            print_json(&updated)
        }
    }
}
