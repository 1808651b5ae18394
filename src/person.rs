//! The person record and gender classification.

use serde::{Deserialize, Serialize};

/// A single person record.
///
/// The wire shape matches the collection backend: camelCase field names and
/// a Mongo-style `_id` key. `id` is `None` until the backend assigns one on
/// create, and is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub mobile_number: String,
}

impl Person {
    /// Presence check used to gate form submission.
    ///
    /// Every field must be filled in: text fields non-empty, age non-zero.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && self.age > 0
            && !self.gender.is_empty()
            && !self.mobile_number.is_empty()
    }
}

/// Display category for a gender string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderCategory {
    Male,
    Female,
    Other,
}

impl GenderCategory {
    /// Classify an arbitrary gender string, case-insensitively.
    ///
    /// Total over all input: anything that is not recognizably male or
    /// female (including the empty string) falls into `Other`.
    pub fn classify(gender: &str) -> Self {
        match gender.to_ascii_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}
