use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid bitmap: {0}")]
    InvalidBitmap(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown box drawing style '{0}' (expected bold, normal, double or borad)")]
    UnknownStyle(String),
    #[error("no glyph for code point U+{0:04X}")]
    MissingGlyph(u32),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FontError>;
