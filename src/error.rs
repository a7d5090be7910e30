use thiserror::Error;

use crate::value::Kind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallError {
    #[error("no module named '{0}'")]
    UnknownModule(String),

    #[error("module '{module}' has no function '{function}'")]
    UnknownFunction { module: String, function: String },

    #[error("{function}() takes {expected} positional argument(s) but {got} were given")]
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("{function}(): argument '{param}' must be {expected}, not {got}")]
    TypeMismatch {
        function: String,
        param: String,
        expected: Kind,
        got: Kind,
    },

    #[error("unsupported literal: {0}")]
    InvalidLiteral(String),
}

pub type Result<T> = std::result::Result<T, CallError>;
