//! Token input resolution shared by every subcommand.
//!
//! The token is taken from, in order of precedence: the positional
//! argument, the environment variable named by `--token-env`, or stdin.
//! With `--from-response` the input is a credential response document
//! rather than a bare token.

use std::env;
use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::TokenSourceArgs;
use crate::core::session::{CredentialResponse, CredentialSink, Session};
use crate::core::token::RawToken;
use crate::error::NonceError;

/// Resolve the token input and deliver it to a fresh [`Session`].
///
/// # Errors
///
/// Returns an error if no non-blank input is available, the environment
/// variable is missing or has an invalid name, stdin cannot be read, or a
/// credential response document is malformed.
pub fn load_session(source: &TokenSourceArgs) -> Result<Session, NonceError> {
    let input = read_input(source)?;
    let input = input.trim();
    if input.is_empty() {
        return Err(NonceError::NoTokenProvided);
    }

    let mut session = Session::new();
    if source.from_response {
        session.receive_response(CredentialResponse::from_json(input)?);
    } else {
        session.receive_token(RawToken::from(input));
    }
    Ok(session)
}

fn read_input(source: &TokenSourceArgs) -> Result<Zeroizing<String>, NonceError> {
    if let Some(token) = &source.token {
        tracing::debug!("reading token from command-line argument");
        return Ok(Zeroizing::new(token.clone()));
    }

    if let Some(name) = &source.token_env {
        validate_env_var_name(name)?;
        tracing::debug!(var = %name, "reading token from environment");
        return match env::var(name) {
            Ok(value) => Ok(Zeroizing::new(value)),
            Err(env::VarError::NotPresent) => Err(NonceError::EnvVarNotFound { name: name.clone() }),
            Err(env::VarError::NotUnicode(_)) => Err(NonceError::InputRead {
                reason: format!("environment variable '{name}' is not valid UTF-8"),
            }),
        };
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(NonceError::NoTokenProvided);
    }

    tracing::debug!("reading token from stdin");
    let mut buffer = Zeroizing::new(String::new());
    stdin
        .lock()
        .read_to_string(&mut *buffer)
        .map_err(|e| NonceError::InputRead {
            reason: e.to_string(),
        })?;
    Ok(buffer)
}

/// Reject names the platform cannot look up.
fn validate_env_var_name(name: &str) -> Result<(), NonceError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(NonceError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_arg(token: &str, from_response: bool) -> TokenSourceArgs {
        TokenSourceArgs {
            token: Some(token.to_string()),
            token_env: None,
            from_response,
        }
    }

    #[test]
    fn test_argument_is_trimmed() {
        let session = load_session(&from_arg("  a.b.c\n", false)).unwrap();
        assert_eq!(session.current_token().unwrap().as_str(), "a.b.c");
    }

    #[test]
    fn test_blank_argument_is_no_token() {
        let err = load_session(&from_arg("   ", false)).unwrap_err();
        assert!(matches!(err, NonceError::NoTokenProvided));
    }

    #[test]
    fn test_argument_as_credential_response() {
        let session = load_session(&from_arg(r#"{"credential":"a.b.c"}"#, true)).unwrap();
        assert_eq!(session.current_token().unwrap().as_str(), "a.b.c");
    }

    #[test]
    fn test_bare_token_with_from_response_fails() {
        let err = load_session(&from_arg("a.b.c", true)).unwrap_err();
        assert!(matches!(err, NonceError::InvalidCredentialResponse { .. }));
    }

    #[test]
    fn test_env_var_name_validation() {
        assert!(validate_env_var_name("ID_TOKEN").is_ok());
        for name in ["", "BAD=NAME", "NUL\0NAME"] {
            assert!(matches!(
                validate_env_var_name(name),
                Err(NonceError::InvalidEnvVarName { .. })
            ));
        }
    }

    #[test]
    fn test_missing_env_var() {
        let source = TokenSourceArgs {
            token: None,
            token_env: Some("NONCE_TERM_TEST_SURELY_UNSET_VAR".to_string()),
            from_response: false,
        };
        let err = load_session(&source).unwrap_err();
        assert!(matches!(err, NonceError::EnvVarNotFound { name } if name == "NONCE_TERM_TEST_SURELY_UNSET_VAR"));
    }
}
