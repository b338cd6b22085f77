// src/application/error.rs
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Misuse of the screen's stateful parts. Validation itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("password policy is already open")]
    PolicyAlreadyOpen,

    #[error("password policy is not open")]
    PolicyNotOpen,
}
