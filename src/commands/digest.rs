//! Handler for the `digest` subcommand.

use anyhow::Result;
use serde_json::json;

use crate::cli::DigestArgs;
use crate::commands::input;
use crate::error::NonceError;

/// Execute the `digest` subcommand with the given arguments.
pub async fn execute(args: &DigestArgs) -> Result<()> {
    let session = input::load_session(&args.source)?;
    let digest = session.digest().await?.ok_or(NonceError::NoTokenProvided)?;

    if args.json {
        let output = json!({ "algorithm": "SHA-256", "digest": digest });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{digest}");
    }
    Ok(())
}
