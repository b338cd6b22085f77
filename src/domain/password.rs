pub mod policy;
pub mod rule;

pub use policy::{PasswordPolicy, PolicyEntry, PolicySnapshot, PASSWORD_VALID_MESSAGE};
pub use rule::PasswordRuleKind;
