pub mod blocks;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;
use xi_rope::Rope;

use crate::error::ParseError;
use blocks::{BlockBuilder, BlockNode};
use rope::{LineRef, lines_with_numbers};

/// Container depth at which block quote and list markers stop opening
/// new containers.
pub const DEFAULT_MAX_NESTING: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of entries on the container stack, document root
    /// included. A marker whose container would not fit is read as text;
    /// an item starting a new list needs room for the list as well.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    /// Always a closed `Document` node.
    pub root: BlockNode,
    pub line_count: usize,
}

pub fn parse_document(rope: &Rope) -> Result<ParsedDoc, ParseError> {
    parse_document_with(rope, ParseOptions::default())
}

pub fn parse_document_with(rope: &Rope, options: ParseOptions) -> Result<ParsedDoc, ParseError> {
    build(lines_with_numbers(rope), options)
}

pub fn parse_str(src: &str) -> Result<ParsedDoc, ParseError> {
    parse_document(&Rope::from(src))
}

/// Parses lines that are already split, numbering them from 1.
pub fn parse_lines<I, S>(lines: I, options: ParseOptions) -> Result<ParsedDoc, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build(
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| LineRef::new(idx + 1, line.as_ref())),
        options,
    )
}

fn build(lines: impl Iterator<Item = LineRef>, options: ParseOptions) -> Result<ParsedDoc, ParseError> {
    let mut builder = BlockBuilder::new(options)?;
    let mut line_count = 0;
    for line in lines {
        line_count = line.number;
        builder.push(&line)?;
    }
    let root = builder.finish()?;
    log::debug!(
        "parsed {line_count} lines into {} top-level blocks",
        root.children.len()
    );
    Ok(ParsedDoc { root, line_count })
}
