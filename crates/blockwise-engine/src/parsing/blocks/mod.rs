//! # Block Parsing
//!
//! CommonMark block structure, built one line at a time.
//!
//! ## Parsing Phases
//!
//! 1. **Container matching** (`builder`): each open container on the
//!    `ContainerStack` consumes its prefix (`>`, list item indentation) or
//!    fails, which marks it and everything deeper as unmatched.
//! 2. **Leaf continuation**: the open leaf (paragraph or code block) takes
//!    the line if its own rule allows.
//! 3. **Block starts** (`classify`): the rest of the line is matched against
//!    the static patterns in precedence order. Container starts repeat on
//!    the remainder, so `> - item` opens a quote and a list item.
//! 4. **Text**: lazy paragraph continuation, appending to the open leaf, or
//!    a new paragraph.
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind` and the finished `BlockNode` tree
//! - **`kinds`**: per-block continuation and marker rules
//! - **`line`**: tab-aware `LineCursor`
//! - **`matchers`**: the compiled static pattern table and closing fences
//! - **`classify`**: `LineClassifier` turns a line into `BlockStart` candidates
//! - **`arena`** / **`containers`**: node storage and the open-container stack
//! - **`content`**: `PendingContentBuffer` for open leaves
//! - **`builder`**: `BlockBuilder`, the per-line state machine
//!
//! ## Key Invariants
//!
//! - At most one leaf is open: the innermost container's last child
//! - Fenced code is a raw zone until its closing fence
//! - List tightness is decided when the list closes

pub mod arena;
pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod line;
pub mod matchers;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::LineClassifier;
pub use content::PendingContentBuffer;
pub use kinds::{Delimiter, FenceInfo, ListMarker, MarkerKind};
pub use matchers::{StaticMatchers, static_matchers};
pub use open::{BlockStart, ClassifyContext};
pub use types::{BlockKind, BlockNode};
