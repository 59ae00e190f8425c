//! Data structures shared by extraction and record mapping.
//!
//! The extractor produces a [`Table`] of strings; the mapper turns its rows
//! into [`UserRecord`]s.

mod cell;
mod record;
mod table;

pub use cell::*;
pub use record::*;
pub use table::*;
