//! Collapsed and expanded rendering of the raw token.

use crate::core::token::RawToken;

/// Characters of the token shown while collapsed.
pub const PREVIEW_CHARS: usize = 48;

/// Whether the collapsed view hides part of `token`.
pub fn is_truncated(token: &RawToken) -> bool {
    token.char_len() > PREVIEW_CHARS
}

/// Render the token in full when `expanded`, otherwise as a preview
/// ending in an ellipsis.
pub fn render_token(token: &RawToken, expanded: bool) -> String {
    if expanded || !is_truncated(token) {
        return token.as_str().to_string();
    }
    let preview: String = token.as_str().chars().take(PREVIEW_CHARS).collect();
    format!("{preview}…")
}

/// Label of the control that flips between the two views.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Show less" } else { "Show more" }
}
