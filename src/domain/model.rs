use std::fmt;

/// The single line a fixture script prints, without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine(String);

impl StatusLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text printed for a named flag that was never given.
pub const UNSET: &str = "None";

/// Renders an optional flag value, falling back to [`UNSET`].
pub fn display_optional(value: Option<&str>) -> &str {
    value.unwrap_or(UNSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_optional() {
        assert_eq!(display_optional(Some("foo")), "foo");
        assert_eq!(display_optional(Some("")), "");
        assert_eq!(display_optional(None), "None");
    }

    #[test]
    fn test_status_line_display_matches_inner() {
        let line = StatusLine::new("Deploying to prod");
        assert_eq!(line.to_string(), "Deploying to prod");
        assert_eq!(line.as_str(), "Deploying to prod");
    }
}
