use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    InvalidArgument(String),
    InvalidHex(String),
    Truncated,
    Overflow,
    NonMinimal,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidArgument(msg) =>
                write!(f, "invalid argument: {}", msg),
            CodecError::InvalidHex(msg) =>
                write!(f, "invalid hex: {}", msg),
            CodecError::Truncated =>
                write!(f, "truncated varint"),
            CodecError::Overflow =>
                write!(f, "varint overflows 64 bits"),
            CodecError::NonMinimal =>
                write!(f, "non-minimal varint encoding"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
