use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to write status line: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
