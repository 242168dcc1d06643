//! Handler for the `decode` subcommand.
//!
//! Decodes and pretty-prints a token's claims without verifying its
//! signature. Supports reading the token from a CLI argument, environment
//! variable, stdin, or a credential response document.

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;

use crate::cli::DecodeArgs;
use crate::commands::input;
use crate::display::{json_printer, section_heading, token_status};
use crate::error::NonceError;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs, use_color: bool) -> Result<()> {
    let session = input::load_session(&args.source)?;
    let claims = match session.visualize() {
        Some(Ok(claims)) => claims,
        Some(Err(cause)) => {
            tracing::debug!(%cause, "token rejected by decoder");
            return Err(NonceError::from(cause).into());
        }
        None => return Err(NonceError::NoTokenProvided.into()),
    };

    if args.json {
        println!("{}", json_printer::render_json(&Value::Object(claims), false));
        return Ok(());
    }

    let status = token_status::render_token_status(&claims, Utc::now(), use_color);

    println!("{}", section_heading("Claims", use_color));
    json_printer::print_json(&Value::Object(claims), use_color);

    if !status.is_empty() {
        println!();
        println!("{}", section_heading("Token Status", use_color));
        for line in status {
            println!("{line}");
        }
    }

    println!();
    println!("Signature NOT verified; claims are shown for inspection only.");
    Ok(())
}
