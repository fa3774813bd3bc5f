use crate::sequence::Sequence;
use std::sync::Arc;

/// Value: What a sequence holds
///
/// This is pure data. Strings and nested sequences sit behind `Arc` so a
/// clone is O(1); nested sequences are never mutated in place, so sharing
/// them between an operation's input and output is unobservable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The explicit null value (distinct from an unset slot and from absent)
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// Floating-point value (IEEE 754 double precision)
    Float(f64),

    /// Immutable string
    String(Arc<str>),

    /// Nested sequence
    Sequence(Arc<Sequence>),
}

impl Value {
    /// Truthiness as used by predicates coming from the dynamic side
    ///
    /// Falsy: `null`, `false`, `0`, `0.0`, `-0.0`, `NaN` and the empty string.
    /// Every sequence is truthy, including an empty one.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Sequence(_) => true,
        }
    }

    /// Name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(&**s),
            _ => None,
        }
    }

    /// Numeric view: ints widen to f64, everything else is `None`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(Arc::new(seq))
    }
}
