use serde::Serialize;

use crate::model::{MetadataField, Parameter};

/// How well `schema.definitions` covers `properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Properties with a definition.
    pub covered: Vec<String>,
    /// Properties with no definition.
    pub missing_definitions: Vec<String>,
    /// Definitions no property refers to.
    pub unused_definitions: Vec<String>,
    /// `(property, field)` pairs whose metadata is absent.
    pub missing_fields: Vec<(String, String)>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing_definitions.is_empty()
    }
}

pub fn coverage(parameter: &Parameter) -> Coverage {
    let mut report = Coverage::default();

    for property in parameter.property_names() {
        match parameter.definition(property) {
            Some(definition) => {
                report.covered.push(property.to_string());
                for field in MetadataField::ALL {
                    if definition.metadata(field).is_none() {
                        report
                            .missing_fields
                            .push((property.to_string(), field.key().to_string()));
                    }
                }
            }
            None => report.missing_definitions.push(property.to_string()),
        }
    }

    if let Some(definitions) = parameter.definitions() {
        let has_property = |name: &str| {
            parameter
                .properties
                .as_ref()
                .is_some_and(|properties| properties.contains_key(name))
        };
        report.unused_definitions = definitions
            .keys()
            .filter(|name| !has_property(name.as_str()))
            .cloned()
            .collect();
    }

    report
}
