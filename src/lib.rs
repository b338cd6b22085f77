//! Reactive validation core for an email/password sign-up form.
//!
//! Raw field text flows through [`application::field_stream`] into per-field
//! validity, is combined by [`application::form`] into submit availability,
//! and the password policy modal reports every rule at a single instant.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
