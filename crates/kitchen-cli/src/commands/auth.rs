//! Auth commands
//!
//! Login, signup, logout and session inspection.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use kitchen_core::{session_token, ApiResponse};
use serde_json::{json, Value};

use crate::output::{
    print_fields, print_info, print_json, print_response, print_success, FieldRow, OutputFormat,
};
use super::Context;

pub async fn login(ctx: &Context, username: String, password: Option<String>) -> Result<()> {
    let password = resolve_password(password)?;
    let response = ctx.auth.login(&username, &password).await?;

    if session_token(&response).is_none() {
        print_info("The server did not return a session token:", ctx.quiet);
        return print_response(&response);
    }
    report_session(ctx, &response, &format!("Logged in as {}", username))
}

pub async fn signup(
    ctx: &Context,
    email: String,
    username: String,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_password(password)?;
    let response = ctx.auth.signup(&email, &username, &password).await?;

    if session_token(&response).is_none() {
        print_success(&format!("Account created for {}", username), ctx.quiet);
        print_info("Log in with `kitchen login` to start a session.", ctx.quiet);
        return Ok(());
    }
    report_session(
        ctx,
        &response,
        &format!("Account created, logged in as {}", username),
    )
}

pub fn logout(ctx: &Context) -> Result<()> {
    let was_logged_in = ctx.auth.is_authenticated();
    ctx.auth.logout();

    if was_logged_in {
        print_success("Logged out", ctx.quiet);
    } else {
        print_info("No active session", ctx.quiet);
    }
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    ctx.require_auth()?;

    let user = ctx.auth.current_user();
    match ctx.format {
        OutputFormat::Json => {
            let value = user.map(|u| u.into_value()).unwrap_or(Value::Null);
            print_json(&value)
        }
        OutputFormat::Table => {
            match user.as_ref().and_then(|u| u.username()) {
                Some(name) => println!("{}", name),
                None => print_info("Logged in (no user record stored)", false),
            }
            Ok(())
        }
    }
}

pub fn status(ctx: &Context) -> Result<()> {
    print_fields(&status_rows(ctx), ctx.format)
}

fn status_rows(ctx: &Context) -> Vec<FieldRow> {
    let config = ctx.gateway().config();
    let user = ctx
        .auth
        .current_user()
        .and_then(|u| u.username().map(str::to_string))
        .unwrap_or_else(|| "-".to_string());

    vec![
        FieldRow::new("API URL", config.base_url.clone()),
        FieldRow::new("Timeout", format!("{} ms", config.timeout.as_millis())),
        FieldRow::new("Session file", ctx.session_path.display().to_string()),
        FieldRow::new("Authenticated", ctx.auth.is_authenticated().to_string()),
        FieldRow::new("User", user),
    ]
}

/// Confirm a response that started a session
fn report_session(ctx: &Context, response: &ApiResponse, message: &str) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let user = response
                .as_json()
                .and_then(|body| body.get("user"))
                .cloned()
                .unwrap_or(Value::Null);
            print_json(&json!({ "authenticated": true, "user": user }))
        }
        OutputFormat::Table => {
            print_success(message, ctx.quiet);
            Ok(())
        }
    }
}

fn resolve_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    eprint!("Password: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();

    if password.is_empty() {
        bail!("Password is required");
    }
    Ok(password)
}
