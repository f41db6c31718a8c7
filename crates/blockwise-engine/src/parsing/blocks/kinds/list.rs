use serde::Serialize;

use crate::parsing::blocks::line::LineCursor;

/// Delimiter after an ordered list number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Delimiter {
    /// `1.`
    Period,
    /// `1)`
    Paren,
}

impl Delimiter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Delimiter::Period),
            ')' => Some(Delimiter::Paren),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Period => '.',
            Delimiter::Paren => ')',
        }
    }
}

/// What kind of marker opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    /// `-`, `*` or `+`.
    Bullet(char),
    /// Digits followed by `.` or `)`.
    Ordered { start: u32, delimiter: Delimiter },
}

impl MarkerKind {
    /// Whether an item with marker `other` continues a list started by `self`.
    pub fn same_list(&self, other: &MarkerKind) -> bool {
        match (self, other) {
            (MarkerKind::Bullet(a), MarkerKind::Bullet(b)) => a == b,
            (
                MarkerKind::Ordered { delimiter: a, .. },
                MarkerKind::Ordered { delimiter: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

/// A list marker recognised by the classifier, before the cursor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarkerMatch {
    pub kind: MarkerKind,
    /// Length of the marker itself in characters (`-` is 1, `10.` is 3).
    pub marker_len: usize,
}

/// Marker geometry recorded on an open list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListMarker {
    pub kind: MarkerKind,
    /// Columns of indentation before the marker.
    pub marker_offset: usize,
    /// Marker plus the spaces that follow it, i.e. how far continuation
    /// lines must be indented past `marker_offset`.
    pub marker_width: usize,
}

/// Spaces after a marker beyond which the content is treated as
/// indented code inside the item.
const MAX_MARKER_PADDING: usize = 4;

impl ListMarker {
    /// Moves the cursor past the marker and its padding and returns the
    /// recorded geometry.
    ///
    /// One to four spaces after the marker become part of the width. Five
    /// or more (or none, for an empty item) count as one, so the rest of
    /// the line starts one column past the marker.
    pub fn consume(cursor: &mut LineCursor<'_>, found: ListMarkerMatch) -> Self {
        let marker_offset = cursor.indent();
        cursor.advance_next_nonspace();
        cursor.advance_offset(found.marker_len, true);

        let after_marker = *cursor;
        let spaces_start = cursor.column();
        loop {
            cursor.advance_offset(1, true);
            let spaces = cursor.column() - spaces_start;
            if spaces > MAX_MARKER_PADDING || !matches!(cursor.peek(), Some(' ' | '\t')) {
                break;
            }
        }
        let spaces = cursor.column() - spaces_start;
        let blank_item = cursor.peek().is_none();

        let marker_width = if spaces > MAX_MARKER_PADDING || spaces < 1 || blank_item {
            *cursor = after_marker;
            if matches!(cursor.peek(), Some(' ' | '\t')) {
                cursor.advance_offset(1, true);
            }
            found.marker_len + 1
        } else {
            found.marker_len + spaces
        };

        Self {
            kind: found.kind,
            marker_offset,
            marker_width,
        }
    }

    /// Columns a continuation line must be indented by.
    pub fn content_indent(&self) -> usize {
        self.marker_offset + self.marker_width
    }

    /// Continuation rule for an open item: indented to the content column,
    /// or blank while the item already has content.
    pub fn continues(&self, cursor: &mut LineCursor<'_>, has_children: bool) -> bool {
        if cursor.is_blank() {
            if !has_children {
                return false;
            }
            cursor.advance_next_nonspace();
            true
        } else if cursor.indent() >= self.content_indent() {
            cursor.advance_offset(self.content_indent(), true);
            true
        } else {
            false
        }
    }
}
