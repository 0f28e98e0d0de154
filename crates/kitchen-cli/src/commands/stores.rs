//! Store commands

use anyhow::Result;
use clap::Subcommand;
use kitchen_core::StoreService;

use crate::output::{print_json, print_success};
use super::Context;

#[derive(Subcommand)]
pub enum StoreAction {
    /// List stores
    List,

    /// List a store's items
    Items {
        /// Store ID
        id: String,
    },

    /// Copy a store item into your pantry
    AddToPantry {
        /// Store item ID
        item_id: String,

        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
}

pub async fn execute(ctx: &Context, action: StoreAction) -> Result<()> {
    let stores = StoreService::new(ctx.gateway().clone());

    match action {
        StoreAction::List => print_json(&stores.all().await?),
        StoreAction::Items { id } => print_json(&stores.items(&id).await?),
        StoreAction::AddToPantry { item_id, quantity } => {
            ctx.require_auth()?;
            let added = stores.add_to_pantry(&item_id, quantity).await?;
            print_success(
                &format!("Added {} x store item {} to pantry", quantity, item_id),
                ctx.quiet,
            );
            print_json(&added)
        }
    }
}
