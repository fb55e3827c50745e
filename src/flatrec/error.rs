use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlatrecError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid item: {0}")]
    InvalidToken(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Value may not contain '|' (field: {field})")]
    DelimiterInValue { field: String },

    #[error("Bad part: {0}")]
    MalformedSegment(String),

    #[error("Corrupt store at line {line}: {reason}")]
    CorruptStore { line: usize, reason: String },

    #[error("Field {field} is not numeric: {value:?}")]
    NotNumeric { field: String, value: String },

    #[error("Total of field {0} overflowed")]
    TotalOverflow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl FlatrecError {
    /// Process exit code for this error: 2 for bad invocations, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlatrecError::Usage(_)
            | FlatrecError::InvalidToken(_)
            | FlatrecError::UnknownField(_)
            | FlatrecError::DelimiterInValue { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlatrecError>;
