//! Slot and Sequence
//!
//! A `Sequence` is dense from index 0: every position below its length is a
//! `Slot`, and a slot that was never assigned is `Slot::Empty` rather than
//! missing. The length is one past the highest assigned index, so the last
//! slot of a non-empty sequence is always occupied.

use crate::error::SeqError;
use crate::value::Value;

/// Largest length a sequence may reach (the dynamic-language array ceiling)
pub const MAX_LENGTH: usize = u32::MAX as usize;

/// One position in a Sequence
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    /// Assigned at some point, holds a value
    Occupied(Value),
    /// Never assigned
    #[default]
    Empty,
}

impl Slot {
    /// The stored value, or `None` for a hole
    pub fn value(&self) -> Option<&Value> {
        match self {
            Slot::Occupied(v) => Some(v),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Slot::Occupied(v) => Some(v),
            Slot::Empty => None,
        }
    }
}

impl From<Option<Value>> for Slot {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(v) => Slot::Occupied(v),
            None => Slot::Empty,
        }
    }
}

/// Ordered, integer-indexed container of slots
///
/// `Clone` copies the slot vector, so a cloned sequence is an independent
/// instance; nested sequences inside it are shared but immutable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    slots: Vec<Slot>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Construct from a literal list of values: slots `0..N` occupied, length `N`
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            slots: values.into_iter().map(Slot::Occupied).collect(),
        }
    }

    /// Build from raw slots
    ///
    /// Trailing holes are dropped, since length only counts up to the
    /// highest assigned index.
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        let mut slots: Vec<Slot> = slots.into_iter().collect();
        while matches!(slots.last(), Some(Slot::Empty)) {
            slots.pop();
        }
        Self { slots }
    }

    /// One past the highest assigned index
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots that hold a value
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// The slot at `index`, or `None` past the end
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// The value at `index`; absent for out-of-range and unset slots alike
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(Slot::value)
    }

    /// Assign `value` at `index`
    ///
    /// Assigning past the end grows the sequence; the skipped positions
    /// become holes. Growth that cannot be allocated fails with
    /// `CapacityExceeded` and leaves the sequence unchanged.
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), SeqError> {
        if index >= MAX_LENGTH {
            return Err(SeqError::IndexTooLarge(index as u64));
        }
        if index >= self.slots.len() {
            self.slots
                .try_reserve_exact(index + 1 - self.slots.len())
                .map_err(|_| SeqError::CapacityExceeded(index as u64 + 1))?;
            self.slots.resize(index + 1, Slot::Empty);
        }
        self.slots[index] = Slot::Occupied(value);
        Ok(())
    }

    /// Append at index `len`
    pub fn push(&mut self, value: Value) -> Result<(), SeqError> {
        self.set(self.slots.len(), value)
    }

    /// Iterate the raw slots in index order
    pub fn slots(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Iterate index order, yielding `None` for holes
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&Value>> + '_ {
        self.slots.iter().map(Slot::value)
    }

    /// Consume into the raw slot vector
    pub fn into_slots(self) -> Vec<Slot> {
        self.slots
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence::from_values(iter)
    }
}

impl FromIterator<Slot> for Sequence {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        Sequence::from_slots(iter)
    }
}
