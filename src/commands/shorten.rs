//! Handler for the `shorten` subcommand.
//!
//! Prints the first `--length` hex characters of the token's SHA-256
//! digest, a stable identifier for display or copying.

use anyhow::Result;
use serde_json::json;

use crate::cli::ShortenArgs;
use crate::commands::input;
use crate::error::NonceError;

/// Execute the `shorten` subcommand with the given arguments.
pub async fn execute(args: &ShortenArgs) -> Result<()> {
    let mut session = input::load_session(&args.source)?;
    session.shorten(args.length).await?;
    let fingerprint = session.shortened().ok_or(NonceError::NoTokenProvided)?;
    tracing::debug!(requested = args.length, produced = fingerprint.len(), "shortened token");

    if args.json {
        let output = json!({
            "fingerprint": fingerprint,
            "length": fingerprint.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{fingerprint}");
    }
    Ok(())
}
