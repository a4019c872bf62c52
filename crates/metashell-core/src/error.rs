//! Errors raised while decoding trace tokens.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Location is not a `file|line|column` triple with integer line and column.
    #[error("invalid file location: \"{0}\"")]
    InvalidFileLocation(String),

    /// Token does not name an instantiation kind.
    #[error("invalid instantiation kind: \"{0}\"")]
    UnknownInstantiationKind(String),
}
