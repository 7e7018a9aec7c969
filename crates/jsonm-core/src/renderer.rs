//! Renderer: writes a [`Value`] back out as text.
//!
//! Output shape:
//!
//! - `null`, `true`, `false`
//! - numbers in Rust's shortest round-trip decimal form (`1`, `2.5`, `-0.125`)
//! - strings between double quotes, contents written verbatim (embedded quotes
//!   are not escaped, matching the tokenizer, which decodes no escapes)
//! - arrays as `[ v1, v2 ]`, objects as `{ "k1":v1, "k2":v2 }`, empty ones as
//!   `[]` and `{}`
//!
//! Objects are written in iteration order. The parser prepends each member it
//! reads, so re-parsing rendered output reverses the members of every object;
//! rendering and re-parsing twice gives back an equal value as long as no
//! string contains a `"`. Input whitespace is not preserved.

use std::fmt;

use crate::value::Value;

/// Render `value` to a new string.
///
/// ```
/// use jsonm_core::{parse, render};
///
/// let value = parse(r#"{"a":1,"b":[true,null]}"#).unwrap();
/// assert_eq!(render(&value), r#"{ "b":[ true, null ], "a":1 }"#);
/// ```
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Render `value` into any `fmt::Write` sink.
pub fn render_to<W: fmt::Write>(value: &Value, out: &mut W) -> fmt::Result {
    out.write_str(&render(value))
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[ ");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push_str(" ]");
        }
        Value::Object(entries) => {
            if entries.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push_str(" }");
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(s);
    out.push('"');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
