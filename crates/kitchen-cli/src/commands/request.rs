//! Raw request commands
//!
//! Send any endpoint through the gateway, with the stored session attached.

use anyhow::{Context as _, Result};
use clap::Subcommand;
use serde_json::Value;

use crate::output::print_response;
use super::{parse_key_val, Context};

#[derive(Subcommand)]
pub enum RequestAction {
    /// GET an endpoint
    Get {
        /// Endpoint path, e.g. /recipes
        endpoint: String,

        /// Query parameter (repeatable)
        #[arg(long = "param", short, value_name = "KEY=VALUE", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// POST a JSON body (an empty object when --data is omitted)
    Post {
        endpoint: String,

        /// JSON request body
        #[arg(long, short)]
        data: Option<String>,
    },

    /// PUT a JSON body (an empty object when --data is omitted)
    Put {
        endpoint: String,

        /// JSON request body
        #[arg(long, short)]
        data: Option<String>,
    },

    /// DELETE an endpoint
    Delete { endpoint: String },
}

pub async fn execute(ctx: &Context, action: RequestAction) -> Result<()> {
    let gateway = ctx.gateway();

    let response = match action {
        RequestAction::Get { endpoint, params } => gateway.get(&endpoint, params).await?,
        RequestAction::Post { endpoint, data } => match parse_body(data.as_deref())? {
            Some(body) => gateway.post(&endpoint, &body).await?,
            None => gateway.post_empty(&endpoint).await?,
        },
        RequestAction::Put { endpoint, data } => match parse_body(data.as_deref())? {
            Some(body) => gateway.put(&endpoint, &body).await?,
            None => gateway.put_empty(&endpoint).await?,
        },
        RequestAction::Delete { endpoint } => gateway.delete(&endpoint).await?,
    };

    print_response(&response)
}

fn parse_body(data: Option<&str>) -> Result<Option<Value>> {
    data.map(|raw| serde_json::from_str(raw).context("--data must be valid JSON"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(None).unwrap(), None);
        assert_eq!(
            parse_body(Some(r#"{"quantity": 2}"#)).unwrap(),
            Some(json!({"quantity": 2}))
        );
        assert!(parse_body(Some("{not json")).is_err());
    }
}
