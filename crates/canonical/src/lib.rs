//! Sealscan canonical text layer.
//!
//! Turns raw page text into a searchable form while keeping a way back to
//! where every character came from. Downstream stages (keyword search,
//! confidence scoring, section resolution) rely on this for offsets.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default, configurable)
//! - Carriage returns become line feeds (the *canonical source*)
//! - Whitespace collapses to single spaces with no leading or trailing space
//!   (the *normalized* text)
//! - An index map from every normalized byte back to the canonical source
//! - Context windows that never split a UTF-8 character
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence, no failure on any
//! string input. Same text and config, same mapping, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `normalized.len() == index_map.len()`
//! - `index_map` is non-decreasing (characters are dropped, never reordered)
//! - a collapsed whitespace run maps to the *last* whitespace of the run
//! - case is preserved; matching is case-insensitive downstream

mod config;
mod error;
mod mapping;
mod pipeline;
mod whitespace;
mod window;

pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::mapping::CanonicalMapping;
pub use crate::pipeline::{canonical_source, canonicalize};
pub use crate::whitespace::{collapse_whitespace, is_space};
pub use crate::window::{
    ceil_char_boundary, context_window, floor_char_boundary, surrounding, ContextWindow,
};
