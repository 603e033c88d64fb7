// GitHub API response types.
// Defines the language-composition payload and rate limit metadata.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Byte counts per language for a repository, in the order GitHub returned
/// them. The languages endpoint emits entries sorted by byte count, and the
/// bar renders them in that order, so the usual map types (which re-sort or
/// scramble keys) are not usable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Languages(Vec<(String, u64)>);

impl Languages {
    /// Total bytes across all languages.
    pub fn total_bytes(&self) -> u64 {
        self.0.iter().map(|(_, bytes)| *bytes).sum()
    }

    /// Iterate languages in response order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for Languages {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Languages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, bytes) in &self.0 {
            map.serialize_entry(name, bytes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Languages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LanguagesVisitor;

        impl<'de> Visitor<'de> for LanguagesVisitor {
            type Value = Languages;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, bytes)) = access.next_entry::<String, u64>()? {
                    entries.push((name, bytes));
                }
                Ok(Languages(entries))
            }
        }

        deserializer.deserialize_map(LanguagesVisitor)
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_response_order() {
        let json = r#"{"TypeScript": 300, "CSS": 100, "HTML": 50}"#;
        let languages: Languages = serde_json::from_str(json).unwrap();

        let entries: Vec<_> = languages.iter().collect();
        assert_eq!(entries, [("TypeScript", 300), ("CSS", 100), ("HTML", 50)]);
    }

    #[test]
    fn test_non_alphabetical_order_survives_round_trip() {
        let json = r#"{"Zig": 5, "Ada": 3, "C": 1}"#;
        let languages: Languages = serde_json::from_str(json).unwrap();

        assert_eq!(
            serde_json::to_string(&languages).unwrap(),
            r#"{"Zig":5,"Ada":3,"C":1}"#
        );
    }

    #[test]
    fn test_total_bytes() {
        let languages: Languages = serde_json::from_str(r#"{"Rust": 7, "C": 3}"#).unwrap();
        assert_eq!(languages.total_bytes(), 10);
        assert_eq!(Languages::default().total_bytes(), 0);
    }

    #[test]
    fn test_empty_object() {
        let languages: Languages = serde_json::from_str("{}").unwrap();
        assert!(languages.is_empty());
        assert_eq!(languages.len(), 0);
    }
}
