pub mod email;
pub mod errors;
pub mod field;
pub mod password;
pub mod validation;

pub use email::validate_email;
pub use errors::DomainError;
pub use field::{FieldKind, KeyboardKind};
pub use password::{PasswordPolicy, PasswordRuleKind, PolicyEntry, PolicySnapshot};
pub use validation::ValidationResult;
