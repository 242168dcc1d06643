//! Handler for the `show` subcommand.
//!
//! Prints the received token as a collapsed preview, or in full with
//! `--expand`.

use anyhow::Result;
use serde_json::json;

use crate::cli::ShowArgs;
use crate::commands::input;
use crate::display::{section_heading, token_view};
use crate::error::NonceError;

/// Execute the `show` subcommand with the given arguments.
pub fn execute(args: &ShowArgs, use_color: bool) -> Result<()> {
    let mut session = input::load_session(&args.source)?;
    if args.expand {
        session.toggle_expanded();
    }
    let token = session.current_token().ok_or(NonceError::NoTokenProvided)?;

    if args.json {
        let output = json!({
            "token": token.as_str(),
            "length": token.char_len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", section_heading("Token", use_color));
    println!("{}", token_view::render_token(token, session.is_expanded()));

    if token_view::is_truncated(token) {
        let hint = if session.is_expanded() {
            "rerun without --expand"
        } else {
            "rerun with --expand"
        };
        println!();
        println!("{}: {hint}", token_view::toggle_label(session.is_expanded()));
    }
    Ok(())
}
