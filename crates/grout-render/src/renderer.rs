use std::error::Error;
use std::fmt;

use tracing::{debug, warn};

use crate::container::Container;
use crate::dom::Element;
use crate::model::{Definition, MetadataField, Parameter};

/// Class on the anchor naming a property.
pub const SUBTYPE_CLASS: &str = "subtypes";
/// Class on the anchors holding metadata values.
pub const SUBTYPE_FIELD_CLASS: &str = "subtypes_fields";
/// Class on the anchors naming a definition's keys.
pub const SUBTYPE_PROPERTY_CLASS: &str = "subtype_pro";

/// What `set` does with a property that has no definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingDefinition {
    /// Leave the property out and keep rendering the rest.
    #[default]
    Skip,
    /// Fail before anything is appended.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabels {
    pub description: String,
    pub title: String,
    pub plural_title: String,
}

impl Default for FieldLabels {
    fn default() -> Self {
        Self {
            description: "Description".to_string(),
            title: "Title".to_string(),
            plural_title: "Plural title".to_string(),
        }
    }
}

impl FieldLabels {
    pub fn label(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Description => &self.description,
            MetadataField::Title => &self.title,
            MetadataField::PluralTitle => &self.plural_title,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text shown for an absent metadata field.
    pub placeholder: String,
    pub missing_definition: MissingDefinition,
    pub labels: FieldLabels,
}

/// Outcome of one `set` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Properties rendered, in order.
    pub rendered: Vec<String>,
    /// Properties left out for lack of a definition.
    pub skipped: Vec<String>,
    /// Metadata fields that fell back to the placeholder.
    pub missing_fields: usize,
}

impl RenderSummary {
    pub fn is_noop(&self) -> bool {
        self.rendered.is_empty() && self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    MissingDefinition { property: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingDefinition { property } => {
                write!(f, "property `{property}` has no entry in schema.definitions")
            }
        }
    }
}

impl Error for RenderError {}

/// Appends summaries of schema properties to the container it holds.
/// Callers get the container back through `into_container`.
#[derive(Debug)]
pub struct SchemaEditor<C> {
    container: C,
    options: RenderOptions,
}

impl<C> SchemaEditor<C>
where
    C: Container,
{
    pub fn new(container: C) -> Self {
        Self::with_options(container, RenderOptions::default())
    }

    pub fn with_options(container: C, options: RenderOptions) -> Self {
        Self { container, options }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Appends one block per property of `parameter`.
    ///
    /// Each block is a `ul` holding the property marker and its three
    /// metadata items, followed by one marker per key of the property's own
    /// definition. An absent parameter, or one without `properties`, leaves
    /// the container untouched.
    pub fn set(&mut self, parameter: Option<&Parameter>) -> Result<RenderSummary, RenderError> {
        let mut summary = RenderSummary::default();
        let Some(parameter) = parameter else {
            return Ok(summary);
        };
        let Some(properties) = parameter.properties.as_ref() else {
            return Ok(summary);
        };

        if self.options.missing_definition == MissingDefinition::Strict {
            if let Some(property) = properties
                .keys()
                .find(|property| parameter.definition(property.as_str()).is_none())
            {
                return Err(RenderError::MissingDefinition {
                    property: property.clone(),
                });
            }
        }

        for property in properties.keys() {
            let Some(definition) = parameter.definition(property) else {
                warn!(%property, "no definition for property; skipping");
                summary.skipped.push(property.clone());
                continue;
            };

            let (block, missing) = self.property_block(property, definition);
            self.container.append(block.into());
            for key in definition.key_names() {
                self.container.append(
                    Element::new("a")
                        .with_class(SUBTYPE_PROPERTY_CLASS)
                        .with_text(key)
                        .into(),
                );
            }

            debug!(%property, missing, "rendered property");
            summary.missing_fields += missing;
            summary.rendered.push(property.clone());
        }

        Ok(summary)
    }

    fn property_block(&self, property: &str, definition: &Definition) -> (Element, usize) {
        let marker = Element::new("a")
            .with_class(SUBTYPE_CLASS)
            .with_text(property);
        let mut block = Element::new("ul").with_child(marker);
        let mut missing = 0;

        for field in MetadataField::ALL {
            let value = match definition.metadata(field) {
                Some(value) => value,
                None => {
                    missing += 1;
                    self.options.placeholder.clone()
                }
            };
            let value = Element::new("a")
                .with_class(SUBTYPE_FIELD_CLASS)
                .with_text(value);
            block.push(
                Element::new("li")
                    .with_text(format!("{} ", self.options.labels.label(field)))
                    .with_child(value),
            );
        }

        (block, missing)
    }
}

impl<C> Default for SchemaEditor<C>
where
    C: Container + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}
