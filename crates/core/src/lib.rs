//! dynseq Core: the data model behind the dynamic sequence runtime
//!
//! This crate provides the language-agnostic primitives shared by the
//! runtime operations and the command-line front end.
//!
//! Key design principles:
//! - Value: the single dynamic element type (Null, Bool, Int, Float, String, Sequence)
//! - Slot: one position in a sequence, either occupied or an unset hole
//! - Sequence: ordered, integer-indexed, dense-from-zero container of slots
//!
//! "Absent" (nothing found by a lookup) is `Option::None` and is never a
//! `Value`; "unset" (a hole that was never assigned) is `Slot::Empty`.
//!
//! # Modules
//!
//! - `error`: Error type shared by every crate in the workspace
//! - `value`: Core Value enum and truthiness
//! - `sequence`: Slot and Sequence
//! - `render`: Stringification (join/Display) and the inspect form
//! - `serialize`: serde snapshots and literal parsing

pub mod error;
pub mod render;
pub mod sequence;
pub mod serialize;
pub mod value;

pub use error::SeqError;
pub use render::{inspect, render_slot, render_value};
pub use sequence::{MAX_LENGTH, Sequence, Slot};
pub use serialize::{TypedSlot, TypedValue, parse_literal};
pub use value::Value;
