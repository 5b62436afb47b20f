//! Storage encoding of an entry collection.
//!
//! Two layouts exist on disk:
//!
//! - version 0 (legacy): a bare JSON array of entry objects
//! - version 1: `{ "version": 1, "entries": [...] }`
//!
//! Both are read; only the current version is written.

use super::{EntryCollection, MoodEntry};
use crate::constants::CURRENT_SCHEMA_VERSION;
use crate::errors::StorageError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    entries: &'a [MoodEntry],
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    version: u32,
    entries: Vec<MoodEntry>,
}

/// Decodes a stored blob, accepting the legacy and the versioned layout.
///
/// # Errors
///
/// - `StorageError::UnsupportedVersion` if the envelope is newer than this build
/// - `StorageError::Corrupted` for anything else that is not an entry collection
pub fn decode(key: &str, raw: &str) -> Result<EntryCollection, StorageError> {
    let corrupted = |source| StorageError::Corrupted {
        key: key.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(raw).map_err(corrupted)?;

    let entries = if value.is_object() {
        let found = value.get("version").and_then(Value::as_u64).unwrap_or(0);
        if found > u64::from(CURRENT_SCHEMA_VERSION) {
            return Err(StorageError::UnsupportedVersion {
                key: key.to_string(),
                found: u32::try_from(found).unwrap_or(u32::MAX),
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        let envelope: Envelope = serde_json::from_value(value).map_err(corrupted)?;
        tracing::debug!(version = envelope.version, "Decoded versioned entry envelope");
        envelope.entries
    } else {
        // Legacy layout; non-array values fail here with a type error.
        serde_json::from_value::<Vec<MoodEntry>>(value).map_err(corrupted)?
    };

    Ok(EntryCollection::from(entries))
}

/// Encodes a collection in the current versioned layout.
pub fn encode(key: &str, entries: &EntryCollection) -> Result<String, StorageError> {
    serde_json::to_string(&EnvelopeRef {
        version: CURRENT_SCHEMA_VERSION,
        entries: entries.as_slice(),
    })
    .map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodColor;

    const KEY: &str = "moodEntries";

    const LEGACY_BLOB: &str = r##"[
        {"id":"1705316400000","mood":{"emoji":"😊","name":"Heureux","color":"#65A59A"},"note":"Super journee","date":"2024-01-15T11:00:00.000Z"},
        {"id":"1705230000000","mood":{"emoji":"😢","name":"triste","color":["#6D85A8","#9A9EB3"]},"note":"","date":"2024-01-14T11:00:00.000Z"}
    ]"##;

    #[test]
    fn test_decode_legacy_array() {
        let entries = decode(KEY, LEGACY_BLOB).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries.as_slice()[0];
        assert_eq!(first.id, "1705316400000");
        assert_eq!(first.note, "Super journee");
        assert_eq!(first.date.to_rfc3339(), "2024-01-15T11:00:00+00:00");

        let second = &entries.as_slice()[1];
        assert_eq!(second.mood.name, "triste");
        assert_eq!(
            second.mood.color,
            MoodColor::Gradient(vec!["#6D85A8".to_string(), "#9A9EB3".to_string()])
        );
    }

    #[test]
    fn test_encode_writes_versioned_envelope_that_decodes_back() {
        let entries = decode(KEY, LEGACY_BLOB).unwrap();
        let encoded = encode(KEY, &entries).unwrap();

        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["version"], CURRENT_SCHEMA_VERSION);
        assert_eq!(value["entries"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["entries"][0]["id"], "1705316400000");

        assert_eq!(decode(KEY, &encoded).unwrap(), entries);
    }

    #[test]
    fn test_object_without_version_is_treated_as_version_zero() {
        let blob = r#"{"entries":[]}"#;
        assert!(decode(KEY, blob).unwrap().is_empty());
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let blob = r#"{"version":2,"entries":"whatever the future holds"}"#;
        match decode(KEY, blob) {
            Err(StorageError::UnsupportedVersion { found, supported, .. }) => {
                assert_eq!(found, 2);
                assert_eq!(supported, CURRENT_SCHEMA_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_blobs_are_corrupted() {
        for blob in [
            "not json at all",
            "{\"entries\": 5}",
            "42",
            "\"moodEntries\"",
            "[{\"id\": 1}]",
            "[{\"id\":\"x\",\"mood\":{\"emoji\":\"😊\",\"name\":\"Heureux\",\"color\":\"#fff\"},\"note\":\"\",\"date\":\"yesterday\"}]",
        ] {
            match decode(KEY, blob) {
                Err(StorageError::Corrupted { key, .. }) => assert_eq!(key, KEY),
                other => panic!("Expected Corrupted for {:?}, got {:?}", blob, other),
            }
        }
    }

    #[test]
    fn test_missing_note_defaults_to_empty() {
        let blob = r##"[{"id":"a","mood":{"emoji":"🤔","name":"Pensif","color":"#8E9B9D"},"date":"2024-01-15T11:00:00Z"}]"##;
        let entries = decode(KEY, blob).unwrap();
        assert_eq!(entries.as_slice()[0].note, "");
    }
}
