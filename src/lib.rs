pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{parse_positional, BuildArgs, DeployArgs, RunTestsArgs};
pub use crate::core::runner::run;
pub use domain::{model::StatusLine, ports::Script};
pub use utils::error::{Result, ScriptError};
