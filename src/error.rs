use thiserror::Error;

pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to write escape sequence to terminal: {0}")]
    Write(#[from] std::io::Error),
}
