use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CofferError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CofferError>;
