use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Value out of range: {0}")]
    OutOfRange(f64),

    #[error("Choice out of range: {0}")]
    ChoiceOutOfRange(i64),

    #[error("Input stream closed")]
    StreamClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
