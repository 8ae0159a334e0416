use thiserror::Error;

/// Error type for encode/decode operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),
    #[error("base64 string length must be a multiple of four")]
    Base64Length,
    #[error("hex string length must be even")]
    HexLength,
    #[error("illegal character `{0}`")]
    IllegalChar(char),
}
