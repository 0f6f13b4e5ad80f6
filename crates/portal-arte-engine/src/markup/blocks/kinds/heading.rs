/// Heading prefixes. Only two levels exist in authored text.
pub struct HeadingMarker;

impl HeadingMarker {
    pub const H1: &'static str = "# ";
    pub const H2: &'static str = "## ";

    /// Returns `(level, remainder)` when the line opens with a heading marker.
    ///
    /// The marker must be at column zero; `##` is checked first so that it is
    /// not read as a level-1 heading starting with `#`.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        if let Some(rest) = line.strip_prefix(Self::H2) {
            Some((2, rest))
        } else {
            line.strip_prefix(Self::H1).map(|rest| (1, rest))
        }
    }
}
