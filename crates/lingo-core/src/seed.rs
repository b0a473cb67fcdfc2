//! Seed payloads for bulk catalog inserts.
//!
//! One `SeedData` describes a group and the words that belong to it. The CLI
//! reads these from JSON files; `lingo-db` inserts each payload in a single
//! transaction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedGroup {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedWord {
    pub headword: String,
    #[serde(default)]
    pub transliteration: String,
    pub translation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedData {
    pub group: SeedGroup,
    #[serde(default)]
    pub words: Vec<SeedWord>,
}

/// Ids assigned to a seeded group and its words, in payload order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedOutcome {
    pub group_id: i64,
    pub word_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_seed_file_without_transliteration() {
        let json = r#"{
            "group": { "name": "Greetings" },
            "words": [
                { "headword": "hola", "translation": "hello" },
                { "headword": "adios", "transliteration": "a-dee-os", "translation": "goodbye" }
            ]
        }"#;
        let seed: SeedData = serde_json::from_str(json).unwrap();
        assert_eq!(seed.group.name, "Greetings");
        assert_eq!(seed.words.len(), 2);
        assert_eq!(seed.words[0].transliteration, "");
        assert_eq!(seed.words[1].transliteration, "a-dee-os");
    }

    #[test]
    fn words_default_to_empty() {
        let seed: SeedData = serde_json::from_str(r#"{"group":{"name":"Empty"}}"#).unwrap();
        assert!(seed.words.is_empty());
    }
}
