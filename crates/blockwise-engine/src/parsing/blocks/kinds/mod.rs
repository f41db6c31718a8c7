pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceInfo};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list::{Delimiter, ListMarker, ListMarkerMatch, MarkerKind};
pub use paragraph::Paragraph;
