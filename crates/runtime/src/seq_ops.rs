//! Sequence operations
//!
//! The fixed operation set of the sequence runtime. Every operation reads
//! its receiver without mutating it; `concat` and `map` build a fresh,
//! independently owned `Sequence`.
//!
//! Callbacks take `(element_or_absent, index)` and are invoked in ascending
//! index order, synchronously, once per visited index. Holes are visited
//! too, with `None` as the element.
//!
//! # Examples
//!
//! ```
//! use dynseq_core::{Sequence, Value};
//! use dynseq_runtime::SequenceOps;
//!
//! let seq: Sequence = (1..=5).map(Value::Int).collect();
//!
//! assert_eq!(seq.at(-1), Some(&Value::Int(5)));
//! assert_eq!(seq.join("/"), "1/2/3/4/5");
//!
//! let even = seq.find(|v, _| matches!(v, Some(Value::Int(n)) if n % 2 == 0));
//! assert_eq!(even, Some(&Value::Int(2)));
//! ```

use dynseq_core::{MAX_LENGTH, SeqError, Sequence, Slot, Value, render_slot};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Gap observed between the two halves in the legacy concatenation
pub const LEGACY_CONCAT_GAP: usize = 2;

fn default_gap() -> usize {
    LEGACY_CONCAT_GAP
}

/// Where `concat` places the appended elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum ConcatPolicy {
    /// Append starting at `len`
    #[default]
    Contiguous,
    /// Append starting at `len + gap`, leaving `gap` unset slots between
    LegacyGap {
        #[serde(default = "default_gap")]
        gap: usize,
    },
}

impl ConcatPolicy {
    /// The legacy behaviour with its observed two-slot gap
    pub fn legacy() -> Self {
        ConcatPolicy::LegacyGap {
            gap: LEGACY_CONCAT_GAP,
        }
    }

    fn gap(self) -> usize {
        match self {
            ConcatPolicy::Contiguous => 0,
            ConcatPolicy::LegacyGap { gap } => gap,
        }
    }
}

/// The operations of the sequence runtime
pub trait SequenceOps {
    /// Read with negative-index wraparound
    ///
    /// A negative index is normalized by adding `len`. Out-of-range and
    /// unset slots both yield `None`.
    fn at(&self, index: i64) -> Option<&Value>;

    /// Contiguous concatenation into a new sequence
    fn concat(&self, other: &Sequence) -> Sequence;

    /// Concatenation with an explicit placement policy
    ///
    /// Holes in either input are preserved as holes. An empty `other`
    /// contributes nothing, not even the gap. A result that would reach
    /// past `MAX_LENGTH` or cannot be allocated is an error.
    fn concat_with(&self, other: &Sequence, policy: ConcatPolicy) -> Result<Sequence, SeqError>;

    /// Render every slot and join with `separator`
    ///
    /// Holes render as the empty string but still get their separator.
    fn join(&self, separator: &str) -> String;

    /// `join` for a separator coming from the dynamic side
    fn join_value(&self, separator: &Value) -> Result<String, SeqError>;

    /// Transform every index, holes included, into a new dense sequence
    fn map<F>(&self, transform: F) -> Sequence
    where
        F: FnMut(Option<&Value>, usize) -> Value;

    /// `map` with a fallible transform; the first error is returned as is
    fn try_map<F, E>(&self, transform: F) -> Result<Sequence, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<Value, E>;

    /// First element whose predicate holds; stops at the first match
    ///
    /// A match on a hole yields `None`, same as no match at all; use
    /// `find_index` to tell the two apart.
    fn find<F>(&self, predicate: F) -> Option<&Value>
    where
        F: FnMut(Option<&Value>, usize) -> bool;

    fn try_find<F, E>(&self, predicate: F) -> Result<Option<&Value>, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<bool, E>;

    /// Index of the first match
    fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&Value>, usize) -> bool;

    fn try_find_index<F, E>(&self, predicate: F) -> Result<Option<usize>, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<bool, E>;

    /// True when the predicate holds for every index; stops at the first miss
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Option<&Value>, usize) -> bool;

    fn try_every<F, E>(&self, predicate: F) -> Result<bool, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<bool, E>;
}

/// Lift an infallible callback into the fallible form
fn infallible<R>(
    mut f: impl FnMut(Option<&Value>, usize) -> R,
) -> impl FnMut(Option<&Value>, usize) -> Result<R, Infallible> {
    move |element: Option<&Value>, index: usize| Ok(f(element, index))
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(v) => v,
        Err(never) => match never {},
    }
}

impl SequenceOps for Sequence {
    fn at(&self, index: i64) -> Option<&Value> {
        let normalized = if index < 0 {
            index.checked_add(i64::try_from(self.len()).ok()?)?
        } else {
            index
        };
        let normalized = usize::try_from(normalized).ok()?;
        self.get(normalized)
    }

    fn concat(&self, other: &Sequence) -> Sequence {
        let mut slots = Vec::with_capacity(self.len() + other.len());
        slots.extend(self.slots().cloned());
        slots.extend(other.slots().cloned());
        Sequence::from_slots(slots)
    }

    fn concat_with(&self, other: &Sequence, policy: ConcatPolicy) -> Result<Sequence, SeqError> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        let offset = (self.len() as u64).saturating_add(policy.gap() as u64);
        let total = offset.saturating_add(other.len() as u64);
        if total > MAX_LENGTH as u64 {
            return Err(SeqError::IndexTooLarge(total - 1));
        }
        // total <= MAX_LENGTH, so both fit in usize
        let (offset, total) = (offset as usize, total as usize);

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(total)
            .map_err(|_| SeqError::CapacityExceeded(total as u64))?;
        slots.extend(self.slots().cloned());
        slots.resize(offset, Slot::Empty);
        slots.extend(other.slots().cloned());
        Ok(Sequence::from_slots(slots))
    }

    fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, slot) in self.slots().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&render_slot(slot));
        }
        out
    }

    fn join_value(&self, separator: &Value) -> Result<String, SeqError> {
        match separator {
            Value::String(sep) => Ok(self.join(sep)),
            other => Err(SeqError::SeparatorNotString(other.type_name().to_string())),
        }
    }

    fn map<F>(&self, transform: F) -> Sequence
    where
        F: FnMut(Option<&Value>, usize) -> Value,
    {
        unwrap_infallible(self.try_map(infallible(transform)))
    }

    fn try_map<F, E>(&self, mut transform: F) -> Result<Sequence, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<Value, E>,
    {
        let mut results = Vec::with_capacity(self.len());
        for (i, element) in self.iter().enumerate() {
            results.push(transform(element, i)?);
        }
        Ok(Sequence::from_values(results))
    }

    fn find<F>(&self, predicate: F) -> Option<&Value>
    where
        F: FnMut(Option<&Value>, usize) -> bool,
    {
        unwrap_infallible(self.try_find(infallible(predicate)))
    }

    fn try_find<F, E>(&self, predicate: F) -> Result<Option<&Value>, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<bool, E>,
    {
        Ok(self.try_find_index(predicate)?.and_then(|i| self.get(i)))
    }

    fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(Option<&Value>, usize) -> bool,
    {
        unwrap_infallible(self.try_find_index(infallible(predicate)))
    }

    fn try_find_index<F, E>(&self, mut predicate: F) -> Result<Option<usize>, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<bool, E>,
    {
        for (i, element) in self.iter().enumerate() {
            if predicate(element, i)? {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Option<&Value>, usize) -> bool,
    {
        unwrap_infallible(self.try_every(infallible(predicate)))
    }

    fn try_every<F, E>(&self, mut predicate: F) -> Result<bool, E>
    where
        F: FnMut(Option<&Value>, usize) -> Result<bool, E>,
    {
        for (i, element) in self.iter().enumerate() {
            if !predicate(element, i)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
