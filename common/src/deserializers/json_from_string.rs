use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Accepts a JSON document embedded in a string, or the same document
/// already structured by the outer format.
struct JsonDocumentVisitor;

impl<'de> Visitor<'de> for JsonDocumentVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON document, inline or inside a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        serde_json::from_str(v).map_err(|e| E::custom(format!("invalid JSON document: {e}")))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Value, A::Error> {
        Value::deserialize(de::value::MapAccessDeserializer::new(map))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Value, A::Error> {
        Value::deserialize(de::value::SeqAccessDeserializer::new(seq))
    }
}

/// Deserializes a field that may carry its JSON as a string, e.g. an
/// environment variable holding `{"orders":{"hashKey":"order_id"}}`.
pub fn deserialize_json_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let document = deserializer.deserialize_any(JsonDocumentVisitor)?;
    serde_json::from_value::<T>(document).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::deserialize_json_string;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Deserialize)]
    struct Subject {
        #[serde(deserialize_with = "deserialize_json_string")]
        tables: HashMap<String, String>,
    }

    #[test]
    fn json_inside_env_variable() {
        let subject: Subject = envy::from_iter([(
            "TABLES".to_owned(),
            r#"{"orders":"order_id"}"#.to_owned(),
        )])
        .unwrap();

        assert_eq!(Some(&"order_id".to_owned()), subject.tables.get("orders"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = envy::from_iter::<_, Subject>([("TABLES".to_owned(), "{orders".to_owned())]);

        assert!(result.is_err());
    }

    #[test]
    fn structured_document_is_accepted() {
        let subject: Subject = serde_json::from_value(serde_json::json!({
            "tables": { "orders": "order_id" }
        }))
        .unwrap();

        assert_eq!(Some(&"order_id".to_owned()), subject.tables.get("orders"));
    }

    #[test]
    fn document_of_wrong_shape_is_rejected() {
        let result = envy::from_iter::<_, Subject>([(
            "TABLES".to_owned(),
            r#"["orders"]"#.to_owned(),
        )]);

        assert!(result.is_err());
    }
}
