pub mod dto;
pub mod error;
pub mod field_stream;
pub mod form;
pub mod policy_modal;
pub mod ports;
pub mod services;
pub mod signal;

pub use error::{ApplicationError, ApplicationResult};
