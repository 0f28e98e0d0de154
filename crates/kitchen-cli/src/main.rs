//! Kitchen CLI - recipes, pantry and stores from the terminal
//!
//! A command-line client for the Kitchen backend: log in once, then browse
//! recipes, manage the pantry and pull store items into it.

mod commands;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use kitchen_core::{ApiConfig, AuthController, FileStorage, Gateway, SessionStore};

#[derive(Parser)]
#[command(name = "kitchen")]
#[command(author, version, about = "Recipe, pantry and store CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Backend base URL, e.g. http://localhost:8080/api
    #[arg(long, env = "KITCHEN_API_URL", global = true)]
    api_url: Option<String>,

    /// Override session file path (or set KITCHEN_SESSION_PATH env var)
    #[arg(long, env = "KITCHEN_SESSION_PATH", global = true)]
    session: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        username: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long, env = "KITCHEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account; logs in when the backend returns a token
    Signup {
        email: String,
        username: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long, env = "KITCHEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show backend and session status
    Status,

    /// Send a raw request through the gateway
    Request {
        #[command(subcommand)]
        action: commands::request::RequestAction,
    },

    /// Browse and comment on recipes
    Recipes {
        #[command(subcommand)]
        action: commands::recipes::RecipeAction,
    },

    /// Manage pantry items
    Pantry {
        #[command(subcommand)]
        action: commands::pantry::PantryAction,
    },

    /// Browse stores and their items
    Stores {
        #[command(subcommand)]
        action: commands::stores::StoreAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Resolve backend configuration; the flag wins over KITCHEN_ENV defaults
    let mut config = ApiConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.trim());
    }

    // Open the durable session
    let storage = match &cli.session {
        Some(path) => FileStorage::open(path),
        None => FileStorage::open_default(),
    }
    .context("Failed to open session file")?;
    let session_path = storage.path().to_path_buf();
    log::debug!("[cli] Session file {}", session_path.display());
    let session = SessionStore::new(Arc::new(storage));

    log::debug!("[cli] API base URL {}", config.base_url);
    let gateway = Gateway::new(config, session)?;
    let auth = AuthController::with_navigator(
        gateway,
        Arc::new(commands::LoginHint { quiet: cli.quiet }),
    );

    // Create context for commands
    let ctx = commands::Context {
        auth,
        session_path,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    let result = match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&ctx, username, password).await
        }
        Commands::Signup {
            email,
            username,
            password,
        } => commands::auth::signup(&ctx, email, username, password).await,
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Status => commands::auth::status(&ctx),
        Commands::Request { action } => commands::request::execute(&ctx, action).await,
        Commands::Recipes { action } => commands::recipes::execute(&ctx, action).await,
        Commands::Pantry { action } => commands::pantry::execute(&ctx, action).await,
        Commands::Stores { action } => commands::stores::execute(&ctx, action).await,
    };

    if let Err(e) = result {
        log::debug!("[cli] Command failed: {:?}", e);
        output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
