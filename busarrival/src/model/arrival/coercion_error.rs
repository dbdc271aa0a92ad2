use std::num::ParseIntError;

#[derive(thiserror::Error, Debug)]
pub enum CoercionError {
    #[error("unexpected type {0}, expected a string, integer or float")]
    TypeMismatch(&'static str),
    #[error("string '{value}' is not an integer: {source}")]
    InvalidNumber {
        value: String,
        source: ParseIntError,
    },
}
