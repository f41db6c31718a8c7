/// ATX (`# Title`) and setext (`Title` + `===`) heading syntax.
pub struct Heading;

impl Heading {
    /// Heading text from the ATX pattern's content group: the closing `#`
    /// run is already excluded by the pattern, surrounding blanks go here.
    pub fn atx_content(group: Option<&str>) -> String {
        group
            .map(|s| s.trim_matches([' ', '\t']))
            .unwrap_or_default()
            .to_string()
    }

    /// Level for a setext underline, or `None` when the run mixes `=` and
    /// `-`. `line` is the underline without leading indentation.
    pub fn setext_level(line: &str) -> Option<u8> {
        let run = line.trim_end_matches([' ', '\t']);
        let first = run.chars().next()?;
        if !run.chars().all(|c| c == first) {
            return None;
        }
        match first {
            '=' => Some(1),
            '-' => Some(2),
            _ => None,
        }
    }
}
