use crate::error::PatternCompileError;

use super::{
    kinds::{CodeFence, Delimiter, Heading, ListMarkerMatch, MarkerKind},
    line::LineCursor,
    matchers::{StaticMatchers, static_matchers},
    open::{BlockStart, ClassifyContext},
};

/// Characters that can begin a non-indented block start.
const MAYBE_SPECIAL: &[char] = &[
    '>', '#', '`', '~', '=', '-', '*', '_', '+', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Classifies the unconsumed part of a line against the static matchers.
///
/// Has no side effects: the cursor is only read. The builder decides what
/// to do with the candidates and moves the cursor itself.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    matchers: &'static StaticMatchers,
}

impl LineClassifier {
    pub fn new() -> Result<Self, PatternCompileError> {
        Ok(Self {
            matchers: static_matchers()?,
        })
    }

    /// Candidate block starts in precedence order: block quote, ATX
    /// heading, code fence, setext underline, thematic break, list item,
    /// indented code. An empty result means the line is paragraph text (or
    /// blank).
    pub fn classify(&self, cursor: &LineCursor<'_>, ctx: ClassifyContext) -> Vec<BlockStart> {
        let mut starts = Vec::new();

        if cursor.is_indented() {
            // Indentation alone never interrupts a paragraph.
            if !ctx.paragraph_open
                && !cursor.is_blank()
                && self.matchers.indented_code.is_match(&cursor.normalized())
            {
                starts.push(BlockStart::IndentedCode);
            }
            return starts;
        }

        match cursor.peek_nonspace() {
            Some(c) if MAYBE_SPECIAL.contains(&c) => {}
            _ => return starts,
        }

        let line = cursor.normalized();

        if ctx.quote_allowed && self.matchers.block_quote.is_match(&line) {
            starts.push(BlockStart::BlockQuote);
        }

        if let Some(caps) = self.matchers.atx_heading.captures(&line) {
            let level = caps.get(1).map_or(0, |m| m.as_str().len());
            starts.push(BlockStart::AtxHeading {
                level: level as u8,
                content: Heading::atx_content(caps.get(2).map(|m| m.as_str())),
            });
        }

        if let Some(caps) = self.matchers.fenced_code_start.captures(&line)
            && let Some(run) = caps.get(2)
            && let Some(info) =
                CodeFence::from_parts(run.as_str(), caps.get(4).map(|m| m.as_str()), cursor.indent())
        {
            starts.push(BlockStart::FencedCode(info));
        }

        if ctx.paragraph_continues
            && self.matchers.setext_underline.is_match(&line)
            && let Some(level) = Heading::setext_level(cursor.from_nonspace())
        {
            starts.push(BlockStart::SetextUnderline { level });
        }

        if self.matchers.thematic_break.is_match(&line) {
            starts.push(BlockStart::ThematicBreak);
        }

        if ctx.list_allowed
            && let Some(found) = self.list_marker(cursor, ctx)
        {
            starts.push(BlockStart::ListItem(found));
        }

        log::trace!("classified {line:?} as {starts:?}");
        starts
    }

    /// Recognises a bullet or ordered marker.
    ///
    /// Matching runs on the tab-expanded line so a tab after the marker
    /// counts as the required space. When an open paragraph continues, only
    /// a non-empty bullet item or an ordered item starting at 1 may
    /// interrupt it.
    fn list_marker(&self, cursor: &LineCursor<'_>, ctx: ClassifyContext) -> Option<ListMarkerMatch> {
        let line = cursor.expanded();

        let (found, rest) = if let Some(caps) = self.matchers.unordered_list.captures(&line) {
            let bullet = caps.get(2)?.as_str().chars().next()?;
            let rest = caps.get(4).map(|m| m.as_str().to_string());
            (
                ListMarkerMatch {
                    kind: MarkerKind::Bullet(bullet),
                    marker_len: 1,
                },
                rest,
            )
        } else if let Some(caps) = self.matchers.ordered_list.captures(&line) {
            let digits = caps.get(2)?.as_str();
            let start: u32 = digits.parse().ok()?;
            let delimiter = Delimiter::from_char(caps.get(3)?.as_str().chars().next()?)?;
            if ctx.paragraph_continues && start != 1 {
                return None;
            }
            let rest = caps.get(5).map(|m| m.as_str().to_string());
            (
                ListMarkerMatch {
                    kind: MarkerKind::Ordered { start, delimiter },
                    marker_len: digits.len() + 1,
                },
                rest,
            )
        } else {
            return None;
        };

        let empty_item = rest.as_deref().is_none_or(|r| r.trim().is_empty());
        if ctx.paragraph_continues && empty_item {
            return None;
        }
        Some(found)
    }
}
