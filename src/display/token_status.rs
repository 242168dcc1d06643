//! Token status display for temporal claims.
//!
//! Renders human-readable status information for the `iat`, `nbf`, and
//! `exp` claims. This is informational only; nothing is rejected because
//! of what these lines say.

use chrono::{DateTime, Utc};
use nu_ansi_term::Color;
use serde_json::Value;

use super::paint;
use crate::core::codec::Claims;

/// Render status lines for the temporal claims present in `claims`.
///
/// - Expired tokens: red "EXPIRED (X ago)"
/// - Valid tokens: green "VALID (expires in X)"
/// - Not-yet-valid tokens: yellow "NOT YET VALID (valid in X)"
///
/// Claims that are missing or not numeric timestamps are skipped.
pub fn render_token_status(claims: &Claims, now: DateTime<Utc>, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(issued) = claim_time(claims, "iat") {
        lines.push(format!("Issued at:  {}", format_time(issued)));
    }

    if let Some(not_before) = claim_time(claims, "nbf") {
        let mut line = format!("Not before: {}", format_time(not_before));
        if now < not_before {
            let note = format!(
                "NOT YET VALID (valid in {})",
                format_duration((not_before - now).num_seconds())
            );
            line.push_str(&format!(" {}", paint(Color::Yellow, note, use_color)));
        }
        lines.push(line);
    }

    if let Some(expires) = claim_time(claims, "exp") {
        let note = if now >= expires {
            paint(
                Color::Red,
                format!(
                    "EXPIRED ({} ago)",
                    format_duration((now - expires).num_seconds())
                ),
                use_color,
            )
        } else {
            paint(
                Color::Green,
                format!(
                    "VALID (expires in {})",
                    format_duration((expires - now).num_seconds())
                ),
                use_color,
            )
        };
        lines.push(format!("Expires:    {} {note}", format_time(expires)));
    }

    lines
}

fn claim_time(claims: &Claims, name: &str) -> Option<DateTime<Utc>> {
    let seconds = match claims.get(name)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        _ => return None,
    };
    DateTime::from_timestamp(seconds, 0)
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format a span of seconds using its two largest non-zero units.
fn format_duration(seconds: i64) -> String {
    let seconds = seconds.unsigned_abs();
    let units = [
        (seconds / 86_400, "d"),
        (seconds % 86_400 / 3_600, "h"),
        (seconds % 3_600 / 60, "m"),
        (seconds % 60, "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .skip_while(|(amount, _)| *amount == 0)
        .take(2)
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{amount}{unit}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Claims {
        match value {
            Value::Object(map) => map,
            _ => panic!("test claims must be an object"),
        }
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn test_no_temporal_claims_renders_nothing() {
        let lines = render_token_status(&claims(json!({"sub": "1"})), at(0), false);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_issued_at_is_formatted_utc() {
        let lines = render_token_status(&claims(json!({"iat": 1516239022})), at(0), false);
        assert_eq!(lines, vec!["Issued at:  2018-01-18 01:30:22 UTC".to_string()]);
    }

    #[test]
    fn test_expired_token() {
        let lines = render_token_status(
            &claims(json!({"exp": 1_000_000})),
            at(1_000_000 + 2 * 86_400 + 3 * 3_600),
            false,
        );
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Expires:    1970-01-12"));
        assert!(lines[0].ends_with("EXPIRED (2d 3h ago)"));
    }

    #[test]
    fn test_valid_token() {
        let lines = render_token_status(&claims(json!({"exp": 3_600})), at(0), false);
        assert!(lines[0].ends_with("VALID (expires in 1h)"));
    }

    #[test]
    fn test_not_yet_valid_token() {
        let lines = render_token_status(&claims(json!({"nbf": 90})), at(0), false);
        assert!(lines[0].ends_with("NOT YET VALID (valid in 1m 30s)"));
    }

    #[test]
    fn test_past_not_before_has_no_note() {
        let lines = render_token_status(&claims(json!({"nbf": 0})), at(10), false);
        assert_eq!(lines, vec!["Not before: 1970-01-01 00:00:00 UTC".to_string()]);
    }

    #[test]
    fn test_non_numeric_claims_are_skipped() {
        let lines = render_token_status(
            &claims(json!({"iat": "yesterday", "exp": null})),
            at(0),
            false,
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn test_fractional_timestamps_are_truncated() {
        let lines = render_token_status(&claims(json!({"iat": 60.75})), at(0), false);
        assert_eq!(lines, vec!["Issued at:  1970-01-01 00:01:00 UTC".to_string()]);
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(-45), "45s");
        assert_eq!(format_duration(3_600), "1h");
        assert_eq!(format_duration(86_400 + 59), "1d");
        assert_eq!(format_duration(3 * 86_400 + 7_200 + 5), "3d 2h");
    }

    #[test]
    fn test_colored_status_contains_ansi_codes() {
        let lines = render_token_status(&claims(json!({"exp": 0})), at(10), true);
        assert!(lines[0].contains("\u{1b}["));
    }
}
