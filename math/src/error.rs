use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    InvalidArgument { expected: usize, actual: usize },
    SingularMatrix,
    DomainError(&'static str),
    OutOfRange { row: usize, col: usize },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::InvalidArgument { expected, actual } => {
                write!(
                    f,
                    "Invalid argument: expected {} elements, got {}",
                    expected, actual
                )
            }
            MathError::SingularMatrix => write!(f, "Matrix is singular and cannot be inverted"),
            MathError::DomainError(reason) => write!(f, "Domain error: {}", reason),
            MathError::OutOfRange { row, col } => {
                write!(f, "Index out of range: row {}, col {}", row, col)
            }
        }
    }
}

impl Error for MathError {}

pub type MathResult<T> = Result<T, MathError>;
