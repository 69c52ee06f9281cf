use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl PathError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }
}
