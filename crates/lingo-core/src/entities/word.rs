use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A vocabulary entry. Never mutated after seeding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    pub headword: String,
    pub transliteration: String,
    pub translation: String,
}
