//! Named callbacks for `map`, `find` and `every`
//!
//! The command line cannot carry closures, so the callable argument of the
//! higher-order operations is picked from a fixed table. Numeric
//! transforms fail on non-numeric input; the failure travels back through
//! `try_map` unchanged and is reported by the front end.

use clap::ValueEnum;
use dynseq_runtime::Value;

/// A transform raised on its input
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltinError {
    pub builtin: &'static str,
    pub index: usize,
    pub found: String,
}

impl std::fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected a number at index {}, got {}",
            self.builtin, self.index, self.found
        )
    }
}

impl std::error::Error for BuiltinError {}

/// Transforms accepted by `map`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// x * 2
    Double,
    /// x * x
    Square,
    /// -x
    Negate,
    /// x + 1
    Increment,
    /// Rendered string form (holes become "")
    ToString,
    /// The element's index
    Index,
    /// Whether the slot holds a value
    IsSet,
}

impl Transform {
    pub fn name(self) -> &'static str {
        match self {
            Transform::Double => "double",
            Transform::Square => "square",
            Transform::Negate => "negate",
            Transform::Increment => "increment",
            Transform::ToString => "to-string",
            Transform::Index => "index",
            Transform::IsSet => "is-set",
        }
    }

    pub fn apply(self, element: Option<&Value>, index: usize) -> Result<Value, BuiltinError> {
        match self {
            Transform::Double => self.numeric(element, index, |n| n.checked_mul(2), |f| f * 2.0),
            Transform::Square => self.numeric(element, index, |n| n.checked_mul(n), |f| f * f),
            Transform::Negate => self.numeric(element, index, i64::checked_neg, |f| -f),
            Transform::Increment => self.numeric(element, index, |n| n.checked_add(1), |f| f + 1.0),
            Transform::ToString => Ok(Value::from(
                element.map(|v| v.to_string()).unwrap_or_default(),
            )),
            Transform::Index => Ok(Value::Int(index as i64)),
            Transform::IsSet => Ok(Value::Bool(element.is_some())),
        }
    }

    /// Integer arithmetic that widens to float on overflow
    fn numeric(
        self,
        element: Option<&Value>,
        index: usize,
        int_op: impl Fn(i64) -> Option<i64>,
        float_op: impl Fn(f64) -> f64,
    ) -> Result<Value, BuiltinError> {
        match element {
            Some(Value::Int(n)) => Ok(int_op(*n)
                .map(Value::Int)
                .unwrap_or_else(|| Value::Float(float_op(*n as f64)))),
            Some(Value::Float(f)) => Ok(Value::Float(float_op(*f))),
            other => Err(BuiltinError {
                builtin: self.name(),
                index,
                found: other.map_or("absent", Value::type_name).to_string(),
            }),
        }
    }
}

/// Predicates accepted by `find`, `find-index` and `every`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Predicate {
    /// Number divisible by two
    Even,
    /// Number not divisible by two
    Odd,
    /// Number greater than zero
    Positive,
    /// Number less than zero
    Negative,
    /// Truthy value (holes are falsy)
    Truthy,
    /// Slot holds a value
    Set,
    /// Slot is a hole
    Unset,
    /// Value is a string
    String,
}

impl Predicate {
    pub fn test(self, element: Option<&Value>, _index: usize) -> bool {
        let number = element.and_then(Value::as_number);
        match self {
            Predicate::Even => number.is_some_and(|n| n % 2.0 == 0.0),
            Predicate::Odd => number.is_some_and(|n| n.abs() % 2.0 == 1.0),
            Predicate::Positive => number.is_some_and(|n| n > 0.0),
            Predicate::Negative => number.is_some_and(|n| n < 0.0),
            Predicate::Truthy => element.is_some_and(Value::is_truthy),
            Predicate::Set => element.is_some(),
            Predicate::Unset => element.is_none(),
            Predicate::String => matches!(element, Some(Value::String(_))),
        }
    }
}
