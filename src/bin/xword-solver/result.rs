use thiserror::Error;

pub(crate) type XwordResult<T> = Result<T, XwordError>;

#[derive(Error, Debug)]
pub(crate) enum XwordError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to read file {1}, more details: {0}")]
    FileReadingError(std::io::Error, String),
    #[error("The structure file does not contain any fillable cells")]
    EmptyStructure,
    #[error("Invalid word '{0}', words may only contain ASCII letters")]
    InvalidWord(String),
}
