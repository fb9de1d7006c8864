pub mod build_project;
pub mod deploy;
pub mod run_tests;
pub mod runner;

pub use crate::domain::model::StatusLine;
pub use crate::domain::ports::Script;
pub use crate::utils::error::Result;
