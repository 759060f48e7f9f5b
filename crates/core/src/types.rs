//! Shared identifier and timestamp types.

use std::fmt;

use bson::oid::ObjectId;
use bson::Bson;
use serde::{Deserialize, Serialize};

/// All document timestamps are UTC, stored as BSON datetimes
/// (millisecond precision).
pub type Timestamp = bson::DateTime;

/// A store-native document identifier.
///
/// The store holds two id encodings side by side: the native
/// 24-hex-character ObjectId and arbitrary string keys written by earlier
/// importers. `_id` fields deserialize through this type so both encodings
/// round-trip, and lookups resolve through [`DocId::parse`] so the
/// canonical-then-raw fallback lives in one place (see the repository
/// layer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    /// The 24-hex-character store-native encoding.
    Canonical(ObjectId),
    /// An arbitrary string key.
    Raw(String),
}

impl DocId {
    /// Parse an incoming identifier string.
    ///
    /// 24-hex strings parse to [`DocId::Canonical`]; anything else becomes
    /// [`DocId::Raw`].
    pub fn parse(input: &str) -> Self {
        match ObjectId::parse_str(input) {
            Ok(oid) => DocId::Canonical(oid),
            Err(_) => DocId::Raw(input.to_string()),
        }
    }

    /// The canonical ObjectId, when this id carries one.
    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            DocId::Canonical(oid) => Some(*oid),
            DocId::Raw(_) => None,
        }
    }

    /// BSON value for equality filters.
    pub fn to_bson(&self) -> Bson {
        match self {
            DocId::Canonical(oid) => Bson::ObjectId(*oid),
            DocId::Raw(s) => Bson::String(s.clone()),
        }
    }
}

/// The string form: ObjectIds render as their 24-hex encoding, raw keys
/// as-is. Foreign keys are stored in this form.
impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::Canonical(oid) => write!(f, "{}", oid.to_hex()),
            DocId::Raw(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[derive(Debug, Deserialize)]
    struct Keyed {
        #[serde(rename = "_id")]
        id: DocId,
    }

    #[test]
    fn hex_string_parses_to_canonical() {
        let id = DocId::parse("507f1f77bcf86cd799439011");
        assert!(matches!(id, DocId::Canonical(_)));
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn arbitrary_string_parses_to_raw() {
        let id = DocId::parse("user-abc");
        assert_eq!(id, DocId::Raw("user-abc".to_string()));
        assert_eq!(id.to_string(), "user-abc");
        assert!(id.as_object_id().is_none());
    }

    #[test]
    fn short_hex_is_raw() {
        // 23 hex chars is not a valid ObjectId.
        let id = DocId::parse("507f1f77bcf86cd79943901");
        assert!(matches!(id, DocId::Raw(_)));
    }

    #[test]
    fn deserializes_object_id_field() {
        let oid = ObjectId::new();
        let keyed: Keyed = bson::from_document(doc! { "_id": oid }).unwrap();
        assert_eq!(keyed.id, DocId::Canonical(oid));
    }

    #[test]
    fn deserializes_string_field() {
        let keyed: Keyed = bson::from_document(doc! { "_id": "legacy-7" }).unwrap();
        assert_eq!(keyed.id, DocId::Raw("legacy-7".to_string()));
    }
}
