pub mod field;
pub mod form;
pub mod policy;

pub use field::{FieldDirective, FieldValidityState};
pub use form::{FormValidityState, SubmitDirective};
pub use policy::{PolicyRowDto, PolicySnapshotDto};

pub mod serde_time {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }
}
