use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("map file is corrupt, line {line_no}: {reason}: {line:?}")]
    MalformedRecord {
        line_no: usize,
        reason: String,
        line: String,
    },

    #[error("solution has a non-integer token in a v-line: {token:?}")]
    NonIntegerToken { token: String },

    #[error("no solution found in solver output: {reason}")]
    NoSolutionMarker { reason: String },

    #[error("solution contains variable {var} twice")]
    DuplicateVariable { var: u32 },

    #[error("resolution stalled, unresolved ANF variables: {vars:?}")]
    DanglingReference { vars: Vec<u32> },
}

pub type Result<T> = std::result::Result<T, Error>;
