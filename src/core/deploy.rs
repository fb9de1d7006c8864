use crate::config::DeployArgs;
use crate::core::{Script, StatusLine};

impl Script for DeployArgs {
    fn name(&self) -> &'static str {
        "deploy"
    }

    fn status_line(&self) -> StatusLine {
        StatusLine::new(format!("Deploying to {}", self.env))
    }
}
