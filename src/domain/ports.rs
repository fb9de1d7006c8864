use crate::domain::model::StatusLine;
use serde::Serialize;

/// A fixture program: parsed arguments that know how to describe themselves.
pub trait Script: Serialize {
    /// Binary name, used as a log field.
    fn name(&self) -> &'static str;

    fn status_line(&self) -> StatusLine;
}
