//! Terminal display and formatting utilities.
//!
//! Handles colorized JSON output, the collapsed/expanded token view, and
//! temporal claim status for human-readable terminal output.

pub mod json_printer;
pub mod token_status;
pub mod token_view;

use nu_ansi_term::{Color, Style};

/// Section heading such as `--- Claims ---`, bold when colored.
pub fn section_heading(title: &str, use_color: bool) -> String {
    let heading = format!("--- {title} ---");
    if use_color {
        Style::new().bold().paint(heading).to_string()
    } else {
        heading
    }
}

fn paint(color: Color, text: String, use_color: bool) -> String {
    if use_color {
        color.paint(text).to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_section_heading() {
        assert_eq!(section_heading("Claims", false), "--- Claims ---");
    }

    #[test]
    fn test_colored_section_heading_keeps_title() {
        let heading = section_heading("Claims", true);
        assert!(heading.contains("--- Claims ---"));
        assert!(heading.contains('\u{1b}'));
    }
}
