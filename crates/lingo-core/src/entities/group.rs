use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A thematic group of words.
///
/// `word_count` is computed from `word_groups` on every read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub word_count: i64,
}
