// src/domain/errors.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown field kind '{0}'")]
    UnknownFieldKind(String),
}
