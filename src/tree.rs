//! Collapsible tree rendering for arbitrary JSON values
//!
//! Walks a `serde_json::Value` and produces indented, optionally colorized
//! terminal output. Containers can be collapsed per node: a collapsed object
//! renders as `{… N entries}` and a collapsed array as `[… N items]` in
//! place of their children, while siblings keep their own state.
//!
//! Nodes are addressed by JSON Pointer (RFC 6901) paths; the root is `""`.
//! With no collapsed nodes and color disabled, output is byte-identical to
//! `serde_json::to_string_pretty`.

use std::collections::BTreeSet;

use serde_json::Value;

const INDENT: &str = "  ";

// Conservative 8/16-color palette for broad terminal compatibility.
// Avoid bright variants that can lose contrast on themes like Solarized.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";
const COLOR_SUMMARY: &str = "90";

/// Expand/collapse state for a rendered tree
///
/// Stores the set of collapsed node paths; everything else is expanded,
/// which is also the default. State is keyed by path only, so the same
/// state can be applied to any value.
#[derive(Debug, Clone, Default)]
pub struct TreeState {
    collapsed: BTreeSet<String>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse the node at `path`
    pub fn collapse(&mut self, path: &str) {
        self.collapsed.insert(path.to_string());
    }

    /// Expand the node at `path`
    pub fn expand(&mut self, path: &str) {
        self.collapsed.remove(path);
    }

    /// Flip the node at `path`; returns true if it is now collapsed
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.collapsed.remove(path) {
            false
        } else {
            self.collapsed.insert(path.to_string());
            true
        }
    }

    pub fn is_collapsed(&self, path: &str) -> bool {
        self.collapsed.contains(path)
    }

    /// Collapse every container in `value` nested strictly deeper than
    /// `depth` levels (the root is level 0)
    pub fn collapse_deeper_than(&mut self, value: &Value, depth: usize) {
        self.walk_collapse(value, "", 0, depth);
    }

    fn walk_collapse(&mut self, value: &Value, path: &str, level: usize, depth: usize) {
        match value {
            Value::Object(map) => {
                if level > depth && !map.is_empty() {
                    self.collapse(path);
                }
                for (key, child) in map {
                    let child_path = format!("{path}/{}", escape_pointer_token(key));
                    self.walk_collapse(child, &child_path, level + 1, depth);
                }
            }
            Value::Array(items) => {
                if level > depth && !items.is_empty() {
                    self.collapse(path);
                }
                for (idx, child) in items.iter().enumerate() {
                    let child_path = format!("{path}/{idx}");
                    self.walk_collapse(child, &child_path, level + 1, depth);
                }
            }
            _ => {}
        }
    }
}

/// Escape a key for use as a JSON Pointer reference token (RFC 6901)
pub fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Render a JSON value as an indented tree honoring the collapse state
pub fn render_tree(value: &Value, state: &TreeState, use_color: bool) -> String {
    let mut out = String::new();
    write_value(value, "", 0, state, use_color, &mut out);
    out
}

fn write_value(
    value: &Value,
    path: &str,
    indent: usize,
    state: &TreeState,
    use_color: bool,
    out: &mut String,
) {
    match value {
        Value::Null => push_colored("null", COLOR_NULL, use_color, out),
        Value::Bool(val) => {
            let text = if *val { "true" } else { "false" };
            push_colored(text, COLOR_BOOL, use_color, out);
        }
        Value::Number(num) => push_colored(&num.to_string(), COLOR_NUMBER, use_color, out),
        Value::String(text) => {
            let encoded = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
            push_colored(&encoded, COLOR_STRING, use_color, out);
        }
        Value::Array(items) => write_array(items, path, indent, state, use_color, out),
        Value::Object(map) => write_object(map, path, indent, state, use_color, out),
    }
}

fn write_array(
    items: &[Value],
    path: &str,
    indent: usize,
    state: &TreeState,
    use_color: bool,
    out: &mut String,
) {
    if items.is_empty() {
        push_colored("[]", COLOR_PUNCT, use_color, out);
        return;
    }
    if state.is_collapsed(path) {
        push_colored(&collapsed_summary('[', items.len()), COLOR_SUMMARY, use_color, out);
        return;
    }
    push_colored("[", COLOR_PUNCT, use_color, out);
    out.push('\n');
    for (idx, item) in items.iter().enumerate() {
        push_indent(indent + 1, out);
        let child_path = format!("{path}/{idx}");
        write_value(item, &child_path, indent + 1, state, use_color, out);
        if idx + 1 < items.len() {
            push_colored(",", COLOR_PUNCT, use_color, out);
        }
        out.push('\n');
    }
    push_indent(indent, out);
    push_colored("]", COLOR_PUNCT, use_color, out);
}

fn write_object(
    map: &serde_json::Map<String, Value>,
    path: &str,
    indent: usize,
    state: &TreeState,
    use_color: bool,
    out: &mut String,
) {
    if map.is_empty() {
        push_colored("{}", COLOR_PUNCT, use_color, out);
        return;
    }
    if state.is_collapsed(path) {
        push_colored(&collapsed_summary('{', map.len()), COLOR_SUMMARY, use_color, out);
        return;
    }
    push_colored("{", COLOR_PUNCT, use_color, out);
    out.push('\n');
    let len = map.len();
    for (idx, (key, value)) in map.iter().enumerate() {
        push_indent(indent + 1, out);
        let encoded = serde_json::to_string(key).unwrap_or_else(|_| "\"\"".to_string());
        push_colored(&encoded, COLOR_KEY, use_color, out);
        push_colored(":", COLOR_PUNCT, use_color, out);
        out.push(' ');
        let child_path = format!("{path}/{}", escape_pointer_token(key));
        write_value(value, &child_path, indent + 1, state, use_color, out);
        if idx + 1 < len {
            push_colored(",", COLOR_PUNCT, use_color, out);
        }
        out.push('\n');
    }
    push_indent(indent, out);
    push_colored("}", COLOR_PUNCT, use_color, out);
}

fn collapsed_summary(open: char, count: usize) -> String {
    let noun = match (open, count) {
        ('{', 1) => "entry",
        ('{', _) => "entries",
        (_, 1) => "item",
        (_, _) => "items",
    };
    let close = if open == '{' { '}' } else { ']' };
    format!("{open}\u{2026} {count} {noun}{close}")
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn push_colored(text: &str, color: &str, use_color: bool, out: &mut String) {
    if !use_color {
        out.push_str(text);
        return;
    }
    out.push_str("\u{1b}[");
    out.push_str(color);
    out.push('m');
    out.push_str(text);
    out.push_str("\u{1b}[0m");
}
