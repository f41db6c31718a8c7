//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a block tree to a stable `Snap` with an outline
//!   `Display`, used for `insta` snapshots and by the command-line tool
//! - **`invariants`**: Structural checks on a finished tree (root kind, closed
//!   nodes, line ranges in bounds, children nested and ordered)
//!
//! ## Testing Strategy
//!
//! Block behaviour is pinned by fixture snapshots rather than a separate
//! grammar. Every fixture also runs the invariant checks.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, normalize_with_preview};
