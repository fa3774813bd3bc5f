//! Stringification of Values
//!
//! Two forms:
//!
//! - **render**: the string a value contributes to `join` and to `Display`.
//!   Strings appear unquoted, holes and absent values are empty, nested
//!   sequences are their elements joined with `,`.
//! - **inspect**: literal-like syntax for debugging and the REPL, e.g.
//!   `[1, <empty>, "x", [2, 3]]`.
//!
//! # Number Examples
//!
//! - Int: `42`
//! - Float: `2.5`, integral floats drop the fraction (`2.0` renders `2`)
//! - Non-finite: `NaN`, `Infinity`, `-Infinity`
//! - Large and small magnitudes print in positional notation, the way
//!   Rust's `Display` does (`1e21` renders `1000000000000000000000`); no
//!   exponent form is produced.

use crate::sequence::{Sequence, Slot};
use crate::value::Value;

/// Render a value the way `join` stringifies it
pub fn render_value(value: &Value) -> String {
    let mut buf = String::new();
    write_value(value, &mut buf);
    buf
}

/// Render a slot; holes render as the empty string
pub fn render_slot(slot: &Slot) -> String {
    match slot {
        Slot::Occupied(v) => render_value(v),
        Slot::Empty => String::new(),
    }
}

/// Literal-like debug form of a value
pub fn inspect(value: &Value) -> String {
    let mut buf = String::new();
    inspect_value(value, &mut buf);
    buf
}

fn write_value(value: &Value, buf: &mut String) {
    match value {
        Value::Null => buf.push_str("null"),
        Value::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => buf.push_str(&n.to_string()),
        Value::Float(f) => write_float(*f, buf),
        Value::String(s) => buf.push_str(s),
        Value::Sequence(seq) => write_sequence(seq, buf),
    }
}

fn write_sequence(seq: &Sequence, buf: &mut String) {
    for (i, slot) in seq.slots().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        if let Slot::Occupied(v) = slot {
            write_value(v, buf);
        }
    }
}

fn write_float(f: f64, buf: &mut String) {
    if f.is_nan() {
        buf.push_str("NaN");
    } else if f.is_infinite() {
        buf.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else if f == 0.0 {
        // covers -0.0
        buf.push('0');
    } else {
        buf.push_str(&f.to_string());
    }
}

fn inspect_value(value: &Value, buf: &mut String) {
    match value {
        Value::String(s) => inspect_string(s, buf),
        Value::Sequence(seq) => inspect_sequence(seq, buf),
        other => write_value(other, buf),
    }
}

fn inspect_sequence(seq: &Sequence, buf: &mut String) {
    buf.push('[');
    for (i, slot) in seq.slots().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        match slot {
            Slot::Occupied(v) => inspect_value(v, buf),
            Slot::Empty => buf.push_str("<empty>"),
        }
    }
    buf.push(']');
}

/// Quote a string with escaping
fn inspect_string(s: &str, buf: &mut String) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_control() => {
                buf.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_value(self))
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        write_sequence(self, &mut buf);
        f.write_str(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_value(&Value::Int(-42)), "-42");
        assert_eq!(render_value(&Value::Bool(true)), "true");
        assert_eq!(render_value(&Value::Null), "null");
        assert_eq!(render_value(&Value::from("a b")), "a b");
    }

    #[test]
    fn test_render_floats() {
        assert_eq!(render_value(&Value::Float(2.0)), "2");
        assert_eq!(render_value(&Value::Float(2.5)), "2.5");
        assert_eq!(render_value(&Value::Float(-0.0)), "0");
        assert_eq!(render_value(&Value::Float(f64::NAN)), "NaN");
        assert_eq!(render_value(&Value::Float(f64::INFINITY)), "Infinity");
        assert_eq!(render_value(&Value::Float(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(render_value(&Value::Float(1e21)), "1000000000000000000000");
    }

    #[test]
    fn test_render_nested_sequence_with_hole() {
        let mut inner = Sequence::from_values([Value::Int(1)]);
        inner.set(2, Value::Int(3)).unwrap();
        let outer = Sequence::from_values([Value::from(inner), Value::from("z")]);
        assert_eq!(outer.to_string(), "1,,3,z");
    }

    #[test]
    fn test_render_empty_slot() {
        assert_eq!(render_slot(&Slot::Empty), "");
        assert_eq!(render_slot(&Slot::Occupied(Value::Int(9))), "9");
    }

    #[test]
    fn test_inspect() {
        let mut seq = Sequence::from_values([Value::Int(1)]);
        seq.set(2, Value::from("say \"hi\"\n")).unwrap();
        seq.push(Value::from(Sequence::from_values([Value::Float(0.5)])))
            .unwrap();
        assert_eq!(
            inspect(&Value::from(seq)),
            r#"[1, <empty>, "say \"hi\"\n", [0.5]]"#
        );
    }
}
