use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Input to a single render call: the record's properties plus the schema
/// holding their definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Anything but an object (`null`, `false`, `0`, `""`, ...) reads as absent.
    #[serde(
        default,
        deserialize_with = "object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<IndexMap<String, Value>>,
    #[serde(
        default,
        deserialize_with = "schema_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<SchemaSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSection {
    #[serde(
        default,
        deserialize_with = "object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub definitions: Option<IndexMap<String, Definition>>,
}

/// A definition object. Keys keep document order; only `description`,
/// `title` and `plural_title` are read for their values. A definition that
/// is not an object (e.g. the boolean schema `true`) is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct Definition {
    fields: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Description,
    Title,
    PluralTitle,
}

impl MetadataField {
    pub const ALL: [MetadataField; 3] = [
        MetadataField::Description,
        MetadataField::Title,
        MetadataField::PluralTitle,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MetadataField::Description => "description",
            MetadataField::Title => "title",
            MetadataField::PluralTitle => "plural_title",
        }
    }
}

impl Parameter {
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .flat_map(|properties| properties.keys())
            .map(String::as_str)
    }

    pub fn definitions(&self) -> Option<&IndexMap<String, Definition>> {
        self.schema
            .as_ref()
            .and_then(|schema| schema.definitions.as_ref())
    }

    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions()
            .and_then(|definitions| definitions.get(name))
    }
}

impl Definition {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Text of a metadata field. Absent and `null` values yield `None`;
    /// non-string scalars are rendered as their JSON text.
    pub fn metadata(&self, field: MetadataField) -> Option<String> {
        match self.fields.get(field.key())? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn description(&self) -> Option<String> {
        self.metadata(MetadataField::Description)
    }

    pub fn title(&self) -> Option<String> {
        self.metadata(MetadataField::Title)
    }

    pub fn plural_title(&self) -> Option<String> {
        self.metadata(MetadataField::PluralTitle)
    }

    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Definition {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

impl From<Value> for Definition {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::from_map(fields),
            _ => Self::default(),
        }
    }
}

impl From<Definition> for Value {
    fn from(definition: Definition) -> Self {
        Value::Object(definition.fields)
    }
}

fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<IndexMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: From<Value>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(entries) => Ok(Some(
            entries
                .into_iter()
                .map(|(key, value)| (key, T::from(value)))
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn schema_or_none<'de, D>(deserializer: D) -> Result<Option<SchemaSection>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parameter(value: Value) -> Parameter {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_and_null_properties_deserialize_to_none() {
        assert!(parameter(json!({})).properties.is_none());
        assert!(parameter(json!({"properties": null})).properties.is_none());
    }

    #[test]
    fn falsy_or_non_object_properties_deserialize_to_none() {
        for value in [json!(false), json!(0), json!(""), json!(true), json!(["a"])] {
            assert!(
                parameter(json!({"properties": value})).properties.is_none(),
                "{value} should read as absent"
            );
        }
    }

    #[test]
    fn non_object_schema_and_definitions_read_as_absent() {
        assert!(parameter(json!({"schema": false})).schema.is_none());
        let parameter = parameter(json!({"schema": {"definitions": 0}}));
        assert!(parameter.definitions().is_none());
    }

    #[test]
    fn boolean_definition_is_empty() {
        let parameter = parameter(json!({
            "properties": {"a": {}},
            "schema": {"definitions": {"a": true}}
        }));
        let definition = parameter.definition("a").unwrap();
        assert!(definition.is_empty());
        assert_eq!(definition.title(), None);
    }

    #[test]
    fn property_names_keep_document_order() {
        let parameter = parameter(json!({
            "properties": {"zeta": {}, "alpha": {}, "mid": {}}
        }));
        let names = parameter.property_names().collect::<Vec<_>>();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn definition_lookup_tolerates_missing_schema() {
        let parameter = parameter(json!({"properties": {"a": {}}}));
        assert!(parameter.definition("a").is_none());
    }

    #[test]
    fn metadata_treats_null_as_absent_and_stringifies_scalars() {
        let definition: Definition = serde_json::from_value(json!({
            "description": null,
            "title": 42,
            "plural_title": "Items"
        }))
        .unwrap();
        assert_eq!(definition.description(), None);
        assert_eq!(definition.title().as_deref(), Some("42"));
        assert_eq!(definition.plural_title().as_deref(), Some("Items"));
    }

    #[test]
    fn key_names_include_metadata_keys_in_order() {
        let definition: Definition = serde_json::from_value(json!({
            "type": "object",
            "title": "Person",
            "properties": {}
        }))
        .unwrap();
        let keys = definition.key_names().collect::<Vec<_>>();
        assert_eq!(keys, vec!["type", "title", "properties"]);
    }
}
