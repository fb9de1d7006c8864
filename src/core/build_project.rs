use crate::config::BuildArgs;
use crate::core::{Script, StatusLine};

impl Script for BuildArgs {
    fn name(&self) -> &'static str {
        "build_project"
    }

    fn status_line(&self) -> StatusLine {
        StatusLine::new(format!(
            "Building with config={}, output={}",
            self.config, self.output
        ))
    }
}
