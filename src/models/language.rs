use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Byte counts returned by a repository's `languages_url`, in response order.
///
/// GitHub lists the largest language first; that order is what breaks ties
/// when the aggregator ranks equal byte counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBytes(Vec<(String, u64)>);

impl LanguageBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `bytes` to `name`, appending it if unseen.
    pub fn add(&mut self, name: &str, bytes: u64) {
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total += bytes,
            None => self.0.push((name.to_string(), bytes)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, b)| *b)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for LanguageBytes {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut languages = LanguageBytes::new();
        for (name, bytes) in iter {
            languages.add(&name, bytes);
        }
        languages
    }
}

impl Serialize for LanguageBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for LanguageBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LanguageBytesVisitor;

        impl<'de> Visitor<'de> for LanguageBytesVisitor {
            type Value = LanguageBytes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut languages = LanguageBytes::new();
                while let Some((name, bytes)) = map.next_entry::<String, u64>()? {
                    languages.add(&name, bytes);
                }
                Ok(languages)
            }
        }

        deserializer.deserialize_map(LanguageBytesVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub bytes: u64,
    pub percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_response_order() {
        let languages: LanguageBytes =
            serde_json::from_str(r#"{"TypeScript": 900, "CSS": 40, "Astro": 40}"#).unwrap();

        let names: Vec<_> = languages.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["TypeScript", "CSS", "Astro"]);
        assert_eq!(languages.get("CSS"), Some(40));
    }

    #[test]
    fn test_serialize_as_object() {
        let languages: LanguageBytes = vec![("Go".to_string(), 5)].into_iter().collect();
        assert_eq!(serde_json::to_string(&languages).unwrap(), r#"{"Go":5}"#);
    }
}
