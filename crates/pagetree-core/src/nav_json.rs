//! Navigation forest as JSON, written straight from the pre-order walk.
//!
//! Produces the same text serde_json writes for `Vec<NavNode>`, but never
//! builds or recurses through the nested tree, so chains of any depth
//! serialize without growing the call stack.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::hierarchy::Hierarchy;
use crate::record::Hierarchical;

/// Layout of generated JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indentation, as `serde_json::to_string_pretty`.
    #[default]
    Pretty,
    /// No whitespace, as `serde_json::to_string`.
    Compact,
}

impl<T: Hierarchical + Serialize> Hierarchy<T> {
    /// Navigation forest as JSON text.
    ///
    /// Record fields are flattened into each node and `children` is omitted
    /// for leaves, matching the serialized form of [`navigation`](Self::navigation).
    /// Fields of a record come out in key order.
    ///
    /// # Errors
    ///
    /// Returns an error if a record fails to serialize or does not
    /// serialize as a JSON object.
    pub fn navigation_json(&self, style: JsonStyle) -> Result<String, serde_json::Error> {
        let entries: Vec<_> = self.iter().collect();
        if entries.is_empty() {
            return Ok("[]".to_owned());
        }

        let mut out = Writer {
            buf: String::from("["),
            style,
        };

        for (i, entry) in entries.iter().enumerate() {
            let depth = entry.depth;
            let first_sibling = i == 0 || entries[i - 1].depth < depth;
            let next_depth = entries.get(i + 1).map_or(0, |next| next.depth);

            if !first_sibling {
                out.buf.push(',');
            }
            out.line(node_level(depth));
            out.buf.push('{');

            let fields = record_fields(entry.record)?;
            for (n, (key, value)) in fields.iter().enumerate() {
                if n > 0 {
                    out.buf.push(',');
                }
                out.line(node_level(depth) + 1);
                out.key(key)?;
                out.value(value, node_level(depth) + 1)?;
            }

            if next_depth > depth {
                if !fields.is_empty() {
                    out.buf.push(',');
                }
                out.line(node_level(depth) + 1);
                out.key("children")?;
                out.buf.push('[');
                continue;
            }

            if !fields.is_empty() {
                out.line(node_level(depth));
            }
            out.buf.push('}');

            for ancestor in (next_depth..depth).rev() {
                out.line(node_level(ancestor) + 1);
                out.buf.push(']');
                out.line(node_level(ancestor));
                out.buf.push('}');
            }
        }

        out.line(0);
        out.buf.push(']');
        Ok(out.buf)
    }
}

/// Indentation level of the braces of a node at `depth`.
fn node_level(depth: usize) -> usize {
    1 + 2 * depth
}

fn record_fields<T: Serialize>(record: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(serde_json::Error::custom(
            "navigation records must serialize as JSON objects",
        )),
    }
}

struct Writer {
    buf: String,
    style: JsonStyle,
}

impl Writer {
    /// Start a new line at `level` (pretty only).
    fn line(&mut self, level: usize) {
        if self.style == JsonStyle::Pretty {
            self.buf.push('\n');
            self.buf.push_str(&"  ".repeat(level));
        }
    }

    fn key(&mut self, key: &str) -> Result<(), serde_json::Error> {
        self.buf.push_str(&serde_json::to_string(key)?);
        self.buf.push(':');
        if self.style == JsonStyle::Pretty {
            self.buf.push(' ');
        }
        Ok(())
    }

    fn value(&mut self, value: &Value, level: usize) -> Result<(), serde_json::Error> {
        match self.style {
            JsonStyle::Compact => self.buf.push_str(&serde_json::to_string(value)?),
            JsonStyle::Pretty => {
                // JSON strings never hold raw newlines, so every newline is
                // layout and can be shifted to the current level.
                let text = serde_json::to_string_pretty(value)?;
                let shift = format!("\n{}", "  ".repeat(level));
                self.buf.push_str(&text.replace('\n', &shift));
            }
        }
        Ok(())
    }
}
