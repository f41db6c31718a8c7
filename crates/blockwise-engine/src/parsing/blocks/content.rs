//! Pending content for the open leaf block.
//!
//! Lines are appended while a leaf is open and moved out in one piece when
//! it closes, so a finished [`BlockNode`](super::BlockNode) owns its
//! `raw_lines` without copying.

/// Append-only line buffer attached to an open leaf.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingContentBuffer {
    lines: Vec<String>,
}

impl PendingContentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drops trailing lines that contain only spaces or tabs. Used when an
    /// indented code block closes.
    pub fn trim_trailing_blank(&mut self) {
        while self
            .lines
            .last()
            .is_some_and(|l| l.chars().all(|c| c == ' ' || c == '\t'))
        {
            self.lines.pop();
        }
    }

    /// Moves the buffered lines out, leaving the buffer empty.
    pub fn flush(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer(lines: &[&str]) -> PendingContentBuffer {
        let mut b = PendingContentBuffer::new();
        for l in lines {
            b.push((*l).to_string());
        }
        b
    }

    #[test]
    fn push_keeps_order() {
        let b = buffer(&["a", "b"]);
        assert_eq!(b.lines(), ["a", "b"]);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn trim_trailing_blank_keeps_inner_blanks() {
        let mut b = buffer(&["a", "", "b", "", "  ", "\t"]);
        b.trim_trailing_blank();
        assert_eq!(b.lines(), ["a", "", "b"]);
    }

    #[test]
    fn trim_all_blank_leaves_empty() {
        let mut b = buffer(&["", " "]);
        b.trim_trailing_blank();
        assert!(b.is_empty());
    }

    #[test]
    fn flush_moves_lines_out() {
        let mut b = buffer(&["x"]);
        assert_eq!(b.flush(), vec!["x".to_string()]);
        assert!(b.is_empty());
    }
}
