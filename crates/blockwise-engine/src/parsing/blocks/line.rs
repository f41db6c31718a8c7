//! Column-aware cursor over a single input line.
//!
//! Indentation is measured in columns with tabs advancing to the next
//! multiple of [`TAB_STOP`]. A tab can be *partially* consumed (e.g. a list
//! item needing two columns out of a four-column tab); the rest of that tab
//! is then materialised as spaces when the remainder is taken as content.
//! Tabs that are not consumed stay verbatim in content.

/// Tab stop width used for indentation.
pub const TAB_STOP: usize = 4;

/// Indentation (in columns) at which a line becomes indented code.
pub const CODE_INDENT: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    text: &'a str,
    offset: usize,
    column: usize,
    partially_consumed_tab: bool,
    next_nonspace: usize,
    next_nonspace_column: usize,
    indent: usize,
    blank: bool,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut cursor = Self {
            text,
            offset: 0,
            column: 0,
            partially_consumed_tab: false,
            next_nonspace: 0,
            next_nonspace_column: 0,
            indent: 0,
            blank: false,
        };
        cursor.find_next_nonspace();
        cursor
    }

    /// Recomputes the next non-space position and the indentation relative
    /// to the current column.
    pub fn find_next_nonspace(&mut self) {
        let mut i = self.offset;
        let mut cols = self.column;
        for c in self.text[self.offset..].chars() {
            match c {
                ' ' => {
                    i += 1;
                    cols += 1;
                }
                '\t' => {
                    i += 1;
                    cols += TAB_STOP - (cols % TAB_STOP);
                }
                _ => break,
            }
        }
        self.blank = i >= self.text.len();
        self.next_nonspace = i;
        self.next_nonspace_column = cols;
        self.indent = cols - self.column;
    }

    /// Moves the cursor to the next non-space character.
    pub fn advance_next_nonspace(&mut self) {
        self.offset = self.next_nonspace;
        self.column = self.next_nonspace_column;
        self.partially_consumed_tab = false;
    }

    /// Advances by `count` characters, or by `count` columns when `columns`
    /// is set (in which case a tab may be left partially consumed).
    pub fn advance_offset(&mut self, mut count: usize, columns: bool) {
        while count > 0 {
            let Some(c) = self.text[self.offset..].chars().next() else {
                break;
            };
            if c == '\t' {
                let to_tab = TAB_STOP - (self.column % TAB_STOP);
                if columns {
                    self.partially_consumed_tab = to_tab > count;
                    let advance = to_tab.min(count);
                    self.column += advance;
                    if !self.partially_consumed_tab {
                        self.offset += 1;
                    }
                    count -= advance;
                } else {
                    self.partially_consumed_tab = false;
                    self.column += to_tab;
                    self.offset += 1;
                    count -= 1;
                }
            } else {
                self.partially_consumed_tab = false;
                self.offset += c.len_utf8();
                self.column += 1;
                count -= 1;
            }
        }
    }

    /// Character at the cursor.
    pub fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    /// First non-space character at or after the cursor.
    pub fn peek_nonspace(&self) -> Option<char> {
        self.text[self.next_nonspace..].chars().next()
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn is_indented(&self) -> bool {
        self.indent >= CODE_INDENT
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Text from the next non-space character to the end of the line.
    pub fn from_nonspace(&self) -> &'a str {
        &self.text[self.next_nonspace..]
    }

    /// The unconsumed part of the line as content: the leftover columns of
    /// a partially consumed tab become spaces, everything else is verbatim.
    pub fn remainder(&self) -> String {
        if self.partially_consumed_tab {
            let spaces = TAB_STOP - (self.column % TAB_STOP);
            let mut out = " ".repeat(spaces);
            out.push_str(&self.text[self.offset + 1..]);
            out
        } else {
            self.text[self.offset..].to_string()
        }
    }

    /// The unconsumed part of the line with its leading whitespace
    /// replaced by `indent` spaces. Patterns anchored on ` {0,3}` see the
    /// indentation relative to the enclosing container this way.
    pub fn normalized(&self) -> String {
        let mut out = " ".repeat(self.indent);
        out.push_str(self.from_nonspace());
        out
    }

    /// Like [`normalized`](Self::normalized) but with every tab expanded to
    /// spaces at its real column.
    pub fn expanded(&self) -> String {
        let mut out = " ".repeat(self.indent);
        let mut col = self.next_nonspace_column;
        for c in self.from_nonspace().chars() {
            if c == '\t' {
                let width = TAB_STOP - (col % TAB_STOP);
                out.extend(std::iter::repeat_n(' ', width));
                col += width;
            } else {
                out.push(c);
                col += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("foo", 0, false)]
    #[case("   foo", 3, false)]
    #[case("    foo", 4, true)]
    #[case("\tfoo", 4, true)]
    #[case("  \tfoo", 4, true)]
    #[case(" \t foo", 5, true)]
    fn measures_indent_in_columns(#[case] line: &str, #[case] indent: usize, #[case] indented: bool) {
        let c = LineCursor::new(line);
        assert_eq!(c.indent(), indent);
        assert_eq!(c.is_indented(), indented);
    }

    #[test]
    fn blank_lines_are_detected() {
        assert!(LineCursor::new("").is_blank());
        assert!(LineCursor::new(" \t ").is_blank());
        assert!(!LineCursor::new("  x").is_blank());
    }

    #[test]
    fn partially_consumed_tab_becomes_spaces() {
        let mut c = LineCursor::new("\tfoo");
        c.advance_offset(2, true);
        assert_eq!(c.column(), 2);
        assert_eq!(c.remainder(), "  foo");
    }

    #[test]
    fn tab_after_marker_expands_from_its_column() {
        let mut c = LineCursor::new("-\tfoo");
        c.advance_offset(1, false);
        c.advance_offset(1, true);
        assert_eq!(c.column(), 2);
        assert_eq!(c.remainder(), "  foo");
    }

    #[test]
    fn character_advance_consumes_whole_tab() {
        let mut c = LineCursor::new(">\tfoo");
        c.advance_offset(1, false);
        c.advance_offset(1, false);
        assert_eq!(c.column(), 4);
        assert_eq!(c.remainder(), "foo");
    }

    #[test]
    fn indent_is_relative_to_current_column() {
        let mut c = LineCursor::new("  -   bar");
        c.advance_offset(4, true);
        c.find_next_nonspace();
        assert_eq!(c.indent(), 2);
        assert_eq!(c.from_nonspace(), "bar");
    }

    #[test]
    fn normalized_keeps_inner_tabs() {
        let c = LineCursor::new("\t# a\tb");
        assert_eq!(c.normalized(), "    # a\tb");
    }

    #[test]
    fn expanded_replaces_inner_tabs() {
        let c = LineCursor::new("-\tfoo");
        assert_eq!(c.expanded(), "-   foo");
    }

    #[test]
    fn multibyte_text_is_not_split() {
        let mut c = LineCursor::new("é> x");
        c.advance_offset(1, false);
        assert_eq!(c.peek(), Some('>'));
    }
}
