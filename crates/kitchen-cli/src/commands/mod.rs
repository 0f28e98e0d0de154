//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod auth;
pub mod pantry;
pub mod recipes;
pub mod request;
pub mod stores;

use std::path::PathBuf;

use anyhow::{bail, Result};
use colored::Colorize;
use kitchen_core::{AuthController, Gateway, Navigator};

use crate::output::OutputFormat;

/// Shared context for all commands
pub struct Context {
    pub auth: AuthController,
    pub session_path: PathBuf,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    pub fn gateway(&self) -> &Gateway {
        self.auth.gateway()
    }

    /// Fail the command when no session is stored
    pub fn require_auth(&self) -> Result<()> {
        if !self.auth.require_auth() {
            bail!("Not logged in");
        }
        Ok(())
    }
}

/// Terminal stand-in for the login screen: tells the user how to log in
pub struct LoginHint {
    pub quiet: bool,
}

impl Navigator for LoginHint {
    fn redirect_to_login(&self) {
        if !self.quiet {
            eprintln!("{}", "Run `kitchen login <username>` to sign in.".yellow());
        }
    }
}

/// Parse a `key=value` pair
pub fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}
