use thiserror::Error;

/// A record that cannot be turned into a header or item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("record {record} is truncated: needs {expected} bytes but the file has {actual}")]
    Truncated {
        record: usize,
        expected: usize,
        actual: usize,
    },
    #[error("field `{field}` is not NUL terminated within {size} bytes")]
    Unterminated { field: &'static str, size: usize },
    #[error("field `{field}` holds out of range value {value}")]
    InvalidEnum { field: &'static str, value: u8 },
    #[error("menu signature {0:?} is not a WWIV menu")]
    BadSignature(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
