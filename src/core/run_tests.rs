use crate::config::RunTestsArgs;
use crate::core::{Script, StatusLine};
use crate::domain::model::display_optional;

impl Script for RunTestsArgs {
    fn name(&self) -> &'static str {
        "run_tests"
    }

    fn status_line(&self) -> StatusLine {
        StatusLine::new(format!(
            "Running tests: verbose={}, filter={}",
            display_optional(self.verbose.as_deref()),
            display_optional(self.filter.as_deref())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn line(argv: &[&str]) -> String {
        RunTestsArgs::try_parse_from(argv)
            .unwrap()
            .status_line()
            .to_string()
    }

    #[test]
    fn test_both_flags() {
        assert_eq!(
            line(&["run_tests", "--verbose", "true", "--filter", "foo"]),
            "Running tests: verbose=true, filter=foo"
        );
    }

    #[test]
    fn test_no_flags_prints_unset() {
        assert_eq!(
            line(&["run_tests"]),
            "Running tests: verbose=None, filter=None"
        );
    }

    #[test]
    fn test_flag_order_does_not_matter() {
        assert_eq!(
            line(&["run_tests", "--filter", "net", "--verbose", "1"]),
            "Running tests: verbose=1, filter=net"
        );
    }

    #[test]
    fn test_empty_value_is_not_unset() {
        assert_eq!(
            line(&["run_tests", "--verbose", ""]),
            "Running tests: verbose=, filter=None"
        );
    }
}
