//! Compiled line patterns.
//!
//! The eight block-start patterns are compiled once per process into a
//! read-only table shared by every parse. Several of them need
//! backreferences or lookbehind, so they are built with `fancy_regex`.
//! The closing-fence check depends on the open fence and is compiled per
//! fence with plain `regex`.

use std::sync::LazyLock;

use crate::error::PatternCompileError;

pub const ATX_HEADING: &str = r"^ {0,3}(#{1,6})([ \t]+.*?)?(?:(?<=[ \t])#*)?[ \t]*$";
pub const BLOCK_QUOTE: &str = r"^ {0,3}> ?(.*)$";
pub const FENCED_CODE_START: &str = r"^( {0,3})(([~`])\3{2,})[ \t]*(([^\s]+).*?)?[ \t]*$";
pub const THEMATIC_BREAK: &str = r"^ {0,3}(?:([-*_]))(?:[ \t]*\1){2,}[ \t]*$";
pub const INDENTED_CODE: &str = r"^(?: {0,3}\t|    )|^[ \t]*$";
pub const ORDERED_LIST: &str = r"^( {0,3})([0-9]{1,9})([.)])(?:( {1,4})(.*))?$";
pub const SETEXT_UNDERLINE: &str = r"^ {0,3}([-=])+[ \t]*$";
pub const UNORDERED_LIST: &str = r"^( {0,3})([-*+])(?:( {1,4})(.*))?$";

/// Backtracking budget per match. The lazy content groups cost a few steps
/// per character; the `fancy_regex` default of one million steps gives up
/// on lines of a few hundred thousand characters.
pub const BACKTRACK_LIMIT: usize = 50_000_000;

/// A compiled line pattern.
#[derive(Debug)]
pub struct Matcher {
    name: &'static str,
    regex: fancy_regex::Regex,
}

impl Matcher {
    pub fn compile(name: &'static str, pattern: &str) -> Result<Self, PatternCompileError> {
        let regex = fancy_regex::RegexBuilder::new(pattern)
            .backtrack_limit(BACKTRACK_LIMIT)
            .build()
            .map_err(|e| PatternCompileError {
                name,
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { name, regex })
    }

    /// Captured groups for `line`, or `None` on no-match.
    ///
    /// A runtime failure (backtracking limit) counts as no-match: every
    /// input is valid Markdown.
    pub fn captures<'t>(&self, line: &'t str) -> Option<fancy_regex::Captures<'t>> {
        match self.regex.captures(line) {
            Ok(caps) => caps,
            Err(e) => {
                log::warn!("{} matcher gave up on {line:?}: {e}", self.name);
                None
            }
        }
    }

    pub fn is_match(&self, line: &str) -> bool {
        match self.regex.is_match(line) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("{} matcher gave up on {line:?}: {e}", self.name);
                false
            }
        }
    }
}

/// The process-wide block-start pattern set.
#[derive(Debug)]
pub struct StaticMatchers {
    pub atx_heading: Matcher,
    pub block_quote: Matcher,
    pub fenced_code_start: Matcher,
    pub thematic_break: Matcher,
    pub indented_code: Matcher,
    pub ordered_list: Matcher,
    pub setext_underline: Matcher,
    pub unordered_list: Matcher,
}

impl StaticMatchers {
    pub fn compile() -> Result<Self, PatternCompileError> {
        Ok(Self {
            atx_heading: Matcher::compile("atx_heading", ATX_HEADING)?,
            block_quote: Matcher::compile("block_quote", BLOCK_QUOTE)?,
            fenced_code_start: Matcher::compile("fenced_code_start", FENCED_CODE_START)?,
            thematic_break: Matcher::compile("thematic_break", THEMATIC_BREAK)?,
            indented_code: Matcher::compile("indented_code", INDENTED_CODE)?,
            ordered_list: Matcher::compile("ordered_list", ORDERED_LIST)?,
            setext_underline: Matcher::compile("setext_underline", SETEXT_UNDERLINE)?,
            unordered_list: Matcher::compile("unordered_list", UNORDERED_LIST)?,
        })
    }
}

static MATCHERS: LazyLock<Result<StaticMatchers, PatternCompileError>> =
    LazyLock::new(StaticMatchers::compile);

/// The shared matcher table, compiled on first use.
pub fn static_matchers() -> Result<&'static StaticMatchers, PatternCompileError> {
    MATCHERS.as_ref().map_err(Clone::clone)
}

/// Closing-fence check for one open fenced code block: same fence
/// character, at least as long as the opening run, nothing but
/// whitespace after it.
#[derive(Debug)]
pub struct ClosingFence {
    regex: regex::Regex,
}

impl ClosingFence {
    pub fn new(fence_char: char, fence_length: usize) -> Result<Self, PatternCompileError> {
        let pattern = format!(
            "^ {{0,3}}{}{{{fence_length},}}[ \\t]*$",
            regex::escape(&fence_char.to_string())
        );
        let regex = regex::Regex::new(&pattern).map_err(|e| PatternCompileError {
            name: "closing_fence",
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// `line` must be indentation-normalized (see `LineCursor::normalized`).
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
