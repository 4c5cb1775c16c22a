//! Cross-backend identifier codec
//!
//! Storage backends differ in how they hold structured identifiers: some
//! have a native identifier type, others only a fixed-length character
//! column. This module is the boundary adapter between the two
//! representations: a pure, stateless encode/decode pair parameterized by
//! the backend's capability. No business logic lives here.

use uuid::Uuid;

use crate::error::{RegistryError, RegistryResult};

/// What the active backend can store natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdDialect {
    /// Backend has a native structured-identifier type; values pass
    /// through unchanged.
    NativeUuid,
    /// Backend stores identifiers as a 36-character canonical string.
    FixedLengthText,
}

/// An identifier as the backend holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredId {
    Uuid(Uuid),
    Text(String),
}

/// Render an identifier for write. Null passes through as null.
pub fn encode_id(value: Option<Uuid>, dialect: IdDialect) -> Option<StoredId> {
    value.map(|id| match dialect {
        IdDialect::NativeUuid => StoredId::Uuid(id),
        IdDialect::FixedLengthText => StoredId::Text(id.hyphenated().to_string()),
    })
}

/// Recover the structured form on read. A native value passes through
/// unchanged; a stored string is parsed back. Null passes through as null.
pub fn decode_id(stored: Option<StoredId>) -> RegistryResult<Option<Uuid>> {
    match stored {
        None => Ok(None),
        Some(StoredId::Uuid(id)) => Ok(Some(id)),
        Some(StoredId::Text(raw)) => Uuid::parse_str(raw.trim()).map(Some).map_err(|err| {
            RegistryError::internal(format!("malformed stored identifier '{raw}': {err}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_dialect_passes_through() {
        let id = Uuid::new_v4();
        let encoded = encode_id(Some(id), IdDialect::NativeUuid);
        assert_eq!(encoded, Some(StoredId::Uuid(id)));

        let decoded = decode_id(encoded).unwrap();
        assert_eq!(decoded, Some(id));
    }

    #[test]
    fn test_text_dialect_renders_canonical_36_chars() {
        let id = Uuid::new_v4();
        match encode_id(Some(id), IdDialect::FixedLengthText) {
            Some(StoredId::Text(text)) => {
                assert_eq!(text.len(), 36);
                assert_eq!(text, id.hyphenated().to_string());
            }
            other => panic!("expected text form, got {other:?}"),
        }
    }

    #[test]
    fn test_text_roundtrip() {
        let id = Uuid::new_v4();
        let encoded = encode_id(Some(id), IdDialect::FixedLengthText);
        assert_eq!(decode_id(encoded).unwrap(), Some(id));
    }

    #[test]
    fn test_null_passes_through_both_ways() {
        assert_eq!(encode_id(None, IdDialect::NativeUuid), None);
        assert_eq!(encode_id(None, IdDialect::FixedLengthText), None);
        assert_eq!(decode_id(None).unwrap(), None);
    }

    #[test]
    fn test_malformed_text_is_an_error() {
        let err = decode_id(Some(StoredId::Text("P/19.02.022-001".to_string()))).unwrap_err();
        assert!(err.to_string().contains("P/19.02.022-001"));
    }
}
