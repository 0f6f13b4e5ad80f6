/// Bullet list prefix.
pub struct ListMarker;

impl ListMarker {
    pub const DASH: &'static str = "- ";

    /// Returns the item text when the trimmed line opens with `- `.
    pub fn strip(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::DASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dash() {
        assert_eq!(ListMarker::strip("- Item um"), Some("Item um"));
    }

    #[test]
    fn indented_dash_is_still_an_item() {
        assert_eq!(ListMarker::strip("   - Item dois  "), Some("Item dois"));
    }

    #[test]
    fn dash_without_space_is_text() {
        assert_eq!(ListMarker::strip("-5 graus"), None);
    }
}
