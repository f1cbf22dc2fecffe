use thiserror::Error;

/// Errors raised by the fallible surfaces of the crate.
///
/// The scalar conversions never fail; out-of-range input is reported
/// through the composite error code instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RdwgsError {
    #[error("{left_name} length {left} does not match {right_name} length {right}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    #[error("expected {expected} {what} elements, got {got}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, RdwgsError>;
