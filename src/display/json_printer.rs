//! Colorized JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in cyan
//! - Strings in green
//! - Numbers in yellow
//! - Booleans in magenta
//! - Null in red

use nu_ansi_term::Color;
use serde_json::Value;

use super::paint;

const INDENT: &str = "  ";

/// Print a JSON value, colorized when `use_color` is true.
pub fn print_json(value: &Value, use_color: bool) {
    println!("{}", render_json(value, use_color));
}

/// Render a JSON value with 2-space indentation.
///
/// Without color the output is identical to `serde_json::to_string_pretty`.
pub fn render_json(value: &Value, use_color: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, use_color);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, use_color: bool) {
    match value {
        Value::Null => out.push_str(&paint(Color::Red, "null".to_string(), use_color)),
        Value::Bool(b) => out.push_str(&paint(Color::Magenta, b.to_string(), use_color)),
        Value::Number(n) => out.push_str(&paint(Color::Yellow, n.to_string(), use_color)),
        Value::String(_) => out.push_str(&paint(Color::Green, value.to_string(), use_color)),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1, use_color);
                push_separator(out, i + 1 < items.len());
            }
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                push_indent(out, depth + 1);
                let quoted = Value::from(key.as_str()).to_string();
                out.push_str(&paint(Color::Cyan, quoted, use_color));
                out.push_str(": ");
                write_value(out, item, depth + 1, use_color);
                push_separator(out, i + 1 < map.len());
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_separator(out: &mut String, more: bool) {
    if more {
        out.push(',');
    }
    out.push('\n');
}
