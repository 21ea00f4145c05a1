#![doc = document_features::document_features!()]
//! Rectangular nesting of parts onto a single fixed-size stock sheet.
//!
//! Two greedy heuristics, [`SkylinePacker`](packers::SkylinePacker) and
//! [`GuillotinePacker`](packers::GuillotinePacker), each pack the full list of parts.
//! The orchestrator in [`nesting`] keeps whichever layout covers the most of the sheet.

/// Entities to model the rectangular nesting problem
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Placement heuristics
pub mod packers;

/// Running the packers and selecting the best layout
pub mod nesting;

/// Importing instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use nesting::{Nester, execute_nesting};
