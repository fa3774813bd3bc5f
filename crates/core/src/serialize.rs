//! Serialization of Sequences
//!
//! This module provides a serializable representation of runtime values,
//! used for snapshots (bincode or JSON) and for parsing sequence literals.
//!
//! # Why TypedValue?
//!
//! The runtime `Value` shares strings and nested sequences through `Arc`
//! and keeps holes as `Slot::Empty`. `TypedValue`/`TypedSlot` are owned
//! mirrors with serde derives, so holes survive a round trip instead of
//! collapsing into nulls.
//!
//! # Literals
//!
//! `parse_literal` accepts JSON syntax. Arrays become sequences and `null`
//! becomes `Value::Null`; a literal cannot express holes (assign past the
//! end to create them).

use crate::error::SeqError;
use crate::sequence::{Sequence, Slot};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Serializable mirror of `Value`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TypedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<TypedSlot>),
}

/// Serializable mirror of `Slot`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TypedSlot {
    Occupied(TypedValue),
    Empty,
}

impl TypedValue {
    /// Convert from runtime Value
    ///
    /// Non-finite floats are rejected: JSON cannot carry them and a
    /// snapshot should decode identically through either encoding.
    pub fn from_value(value: &Value) -> Result<Self, SeqError> {
        match value {
            Value::Null => Ok(TypedValue::Null),
            Value::Bool(b) => Ok(TypedValue::Bool(*b)),
            Value::Int(n) => Ok(TypedValue::Int(*n)),
            Value::Float(f) => {
                if !f.is_finite() {
                    return Err(SeqError::Snapshot(format!(
                        "cannot serialize non-finite float: {}",
                        f
                    )));
                }
                Ok(TypedValue::Float(*f))
            }
            Value::String(s) => Ok(TypedValue::String(s.to_string())),
            Value::Sequence(seq) => Ok(TypedValue::Sequence(typed_slots(seq)?)),
        }
    }

    /// Convert to runtime Value
    pub fn to_value(&self) -> Value {
        match self {
            TypedValue::Null => Value::Null,
            TypedValue::Bool(b) => Value::Bool(*b),
            TypedValue::Int(n) => Value::Int(*n),
            TypedValue::Float(f) => Value::Float(*f),
            TypedValue::String(s) => Value::from(s.as_str()),
            TypedValue::Sequence(slots) => Value::from(sequence_from_typed(slots)),
        }
    }
}

fn typed_slots(seq: &Sequence) -> Result<Vec<TypedSlot>, SeqError> {
    seq.slots()
        .map(|slot| match slot {
            Slot::Occupied(v) => TypedValue::from_value(v).map(TypedSlot::Occupied),
            Slot::Empty => Ok(TypedSlot::Empty),
        })
        .collect()
}

fn sequence_from_typed(slots: &[TypedSlot]) -> Sequence {
    Sequence::from_slots(slots.iter().map(|slot| match slot {
        TypedSlot::Occupied(v) => Slot::Occupied(v.to_value()),
        TypedSlot::Empty => Slot::Empty,
    }))
}

impl Sequence {
    /// Encode as a compact binary snapshot (bincode)
    pub fn to_bytes(&self) -> Result<Vec<u8>, SeqError> {
        let typed = typed_slots(self)?;
        bincode::serialize(&typed).map_err(|e| SeqError::Snapshot(e.to_string()))
    }

    /// Decode a binary snapshot produced by `to_bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SeqError> {
        let typed: Vec<TypedSlot> =
            bincode::deserialize(bytes).map_err(|e| SeqError::Snapshot(e.to_string()))?;
        Ok(sequence_from_typed(&typed))
    }

    /// Encode as a JSON snapshot
    pub fn to_json(&self) -> Result<String, SeqError> {
        let typed = typed_slots(self)?;
        serde_json::to_string(&typed).map_err(|e| SeqError::Snapshot(e.to_string()))
    }

    /// Decode a JSON snapshot produced by `to_json`
    pub fn from_json(json: &str) -> Result<Self, SeqError> {
        let typed: Vec<TypedSlot> =
            serde_json::from_str(json).map_err(|e| SeqError::Snapshot(e.to_string()))?;
        Ok(sequence_from_typed(&typed))
    }
}

/// Parse a literal written in JSON syntax
pub fn parse_literal(text: &str) -> Result<Value, SeqError> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| SeqError::Literal(e.to_string()))?;
    from_json_value(json)
}

fn from_json_value(json: serde_json::Value) -> Result<Value, SeqError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Int(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| SeqError::Literal(format!("unrepresentable number {}", n))),
        },
        serde_json::Value::String(s) => Ok(Value::from(s)),
        serde_json::Value::Array(items) => {
            let values = items
                .into_iter()
                .map(from_json_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::from(Sequence::from_values(values)))
        }
        serde_json::Value::Object(_) => Err(SeqError::Literal(
            "objects cannot be sequence elements".to_string(),
        )),
    }
}
