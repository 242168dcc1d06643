//! CLI argument definitions for nonce-term.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing;
//! the token input options are shared through [`TokenSourceArgs`].
//!
//! # Security
//!
//! `TokenSourceArgs` implements a custom `Debug` that redacts the token
//! to prevent accidental leakage through debug formatting, error chains,
//! or logging.

use std::ffi::OsStr;
use std::fmt;

use clap::{Parser, Subcommand};

use crate::core::fingerprint::DEFAULT_SHORT_LENGTH;

/// Inspect, decode, and fingerprint identity tokens handed out by a
/// sign-in flow. Decoding is informational: signatures are NOT verified.
#[derive(Debug, Parser)]
#[command(name = "nonce-term")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output. Setting `NO_COLOR` to any non-empty value
    /// has the same effect.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Environment variable that turns colors off when set and non-empty.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

impl Cli {
    /// Whether colors are turned off by `--no-color` or by `NO_COLOR`
    /// holding a non-empty value (its contents are irrelevant, so `0` and
    /// `false` disable colors too).
    pub fn color_disabled(&self, no_color_env: Option<&OsStr>) -> bool {
        self.no_color || no_color_env.is_some_and(|value| !value.is_empty())
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the received token, collapsed to a preview unless expanded.
    Show(ShowArgs),

    /// Decode the token's claims without verifying its signature.
    Decode(DecodeArgs),

    /// Print a short, deterministic SHA-256 fingerprint of the token.
    Shorten(ShortenArgs),

    /// Print the full SHA-256 digest of the token.
    Digest(DigestArgs),
}

/// Where the token comes from.
#[derive(clap::Args)]
pub struct TokenSourceArgs {
    /// The token to use. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Treat the input as a sign-in credential response
    /// (`{"credential": "<token>", ...}`) instead of a bare token.
    #[arg(long)]
    pub from_response: bool,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for TokenSourceArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSourceArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("from_response", &self.from_response)
            .finish()
    }
}

/// Arguments for the `show` subcommand.
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: TokenSourceArgs,

    /// Show the whole token instead of a preview.
    #[arg(long)]
    pub expand: bool,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `decode` subcommand.
#[derive(Debug, clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub source: TokenSourceArgs,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `shorten` subcommand.
#[derive(Debug, clap::Args)]
pub struct ShortenArgs {
    #[command(flatten)]
    pub source: TokenSourceArgs,

    /// Number of hex characters to keep (the full digest has 64).
    ///
    /// Short fingerprints are display identifiers only; they are not
    /// guaranteed to be unique.
    #[arg(
        long,
        short = 'n',
        value_name = "CHARS",
        env = "NONCE_TERM_SHORT_LENGTH",
        default_value_t = DEFAULT_SHORT_LENGTH
    )]
    pub length: usize,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `digest` subcommand.
#[derive(Debug, clap::Args)]
pub struct DigestArgs {
    #[command(flatten)]
    pub source: TokenSourceArgs,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}
