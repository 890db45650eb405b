use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::TEXT_LIST_DELIMITER;

/// An ordered list of short strings (technologies, tags) persisted as a
/// single comma-joined TEXT column.
///
/// Responses carry the same comma-joined string that is stored (`null` when
/// empty), since clients split it themselves. Requests may send either that
/// string or a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextList(pub Vec<String>);

impl TextList {
    /// Splits a stored column value. `NULL` and blank values yield an empty list.
    pub fn from_joined(raw: Option<&str>) -> Self {
        let items = raw
            .unwrap_or_default()
            .split(TEXT_LIST_DELIMITER)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        TextList(items)
    }

    /// Joins the list for storage; an empty list is stored as `NULL`.
    pub fn to_joined(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(&TEXT_LIST_DELIMITER.to_string()))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for TextList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        // Route through the joined form so both inputs normalise identically
        let items: Vec<String> = iter.into_iter().map(Into::into).collect();
        TextList::from_joined(Some(&items.join(&TEXT_LIST_DELIMITER.to_string())))
    }
}

impl Serialize for TextList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_joined().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Joined(String),
            Items(Vec<String>),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => TextList::default(),
            Some(Raw::Joined(joined)) => TextList::from_joined(Some(&joined)),
            Some(Raw::Items(items)) => items.into_iter().collect(),
        })
    }
}

/// Accepts JSON booleans as well as the `0`/`1` integers older clients send.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(value)) => value,
        Some(Flag::Int(value)) => value != 0,
    })
}

/// Writes a flag as the `0`/`1` integer clients compare against.
pub fn serialize_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        tags: TextList,
        #[serde(default, deserialize_with = "deserialize_flag")]
        featured: bool,
    }

    #[test]
    fn splits_stored_values_and_trims_items() {
        let list = TextList::from_joined(Some("Rust, Tokio ,,Actix"));
        assert_eq!(list.0, vec!["Rust", "Tokio", "Actix"]);
        assert!(TextList::from_joined(None).is_empty());
        assert!(TextList::from_joined(Some("  ")).is_empty());
    }

    #[test]
    fn joins_for_storage() {
        let list = TextList(vec!["Rust".into(), "SQLite".into()]);
        assert_eq!(list.to_joined().as_deref(), Some("Rust,SQLite"));
        assert_eq!(TextList::default().to_joined(), None);
    }

    #[test]
    fn accepts_array_string_and_null_inputs() {
        let from_array: Payload = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert_eq!(from_array.tags.0, vec!["a", "b"]);

        let from_string: Payload = serde_json::from_str(r#"{"tags": "a,b"}"#).unwrap();
        assert_eq!(from_string.tags, from_array.tags);

        let from_null: Payload = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(from_null.tags.is_empty());
    }

    #[test]
    fn array_items_containing_the_delimiter_are_split() {
        let payload: Payload = serde_json::from_str(r#"{"tags": ["a,b", " c "]}"#).unwrap();
        assert_eq!(payload.tags.0, vec!["a", "b", "c"]);
    }

    #[test]
    fn serializes_as_joined_string() {
        let list = TextList(vec!["Rust".into(), "Tokio".into()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#""Rust,Tokio""#);
        assert_eq!(serde_json::to_string(&TextList::default()).unwrap(), "null");
    }

    #[test]
    fn joined_output_reads_back_unchanged() {
        let list = TextList(vec!["a".into(), "b".into()]);
        let json = serde_json::to_string(&list).unwrap();
        let payload: Payload = serde_json::from_str(&format!(r#"{{"tags": {}}}"#, json)).unwrap();
        assert_eq!(payload.tags, list);
    }

    #[test]
    fn writes_flags_as_integers() {
        #[derive(Serialize)]
        struct Flagged {
            #[serde(serialize_with = "serialize_flag")]
            featured: bool,
        }

        assert_eq!(serde_json::to_string(&Flagged { featured: true }).unwrap(), r#"{"featured":1}"#);
        assert_eq!(serde_json::to_string(&Flagged { featured: false }).unwrap(), r#"{"featured":0}"#);
    }

    #[test]
    fn reads_boolean_and_integer_flags() {
        let cases = [
            (r#"{"featured": true}"#, true),
            (r#"{"featured": 1}"#, true),
            (r#"{"featured": 0}"#, false),
            (r#"{"featured": null}"#, false),
            (r#"{}"#, false),
        ];
        for (json, expected) in cases {
            let payload: Payload = serde_json::from_str(json).unwrap();
            assert_eq!(payload.featured, expected, "{}", json);
        }
    }
}
