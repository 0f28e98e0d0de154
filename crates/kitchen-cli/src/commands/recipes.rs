//! Recipe commands

use anyhow::Result;
use clap::Subcommand;
use kitchen_core::RecipeService;

use crate::output::{print_json, print_success};
use super::Context;

#[derive(Subcommand)]
pub enum RecipeAction {
    /// List all recipes
    List,

    /// List your own recipes
    Mine,

    /// Show one recipe
    Show { id: String },

    /// Search recipes
    Search { query: String },

    /// Rate and comment on a recipe
    Comment {
        /// Recipe ID
        id: String,

        /// Rating from 1 to 5
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        /// Comment text
        text: String,
    },
}

pub async fn execute(ctx: &Context, action: RecipeAction) -> Result<()> {
    let recipes = RecipeService::new(ctx.gateway().clone());

    match action {
        RecipeAction::List => print_json(&recipes.all().await?),
        RecipeAction::Mine => {
            ctx.require_auth()?;
            print_json(&recipes.mine().await?)
        }
        RecipeAction::Show { id } => print_json(&recipes.by_id(&id).await?),
        RecipeAction::Search { query } => print_json(&recipes.search(&query).await?),
        RecipeAction::Comment { id, rating, text } => {
            ctx.require_auth()?;
            let created = recipes.add_comment(&id, rating, &text).await?;
            print_success(&format!("Comment added to recipe {}", id), ctx.quiet);
            if !ctx.quiet {
                print_json(&created)?;
            }
            Ok(())
        }
    }
}
