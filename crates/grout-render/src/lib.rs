pub mod container;
pub mod coverage;
pub mod document;
pub mod dom;
pub mod model;
pub mod renderer;
pub mod writer;

pub use container::{Container, HtmlContainer, TextContainer};
pub use coverage::{Coverage, coverage};
pub use document::{DocumentError, DocumentFormat, load_parameter};
pub use dom::{Element, Node};
pub use model::{Definition, MetadataField, Parameter, SchemaSection};
pub use renderer::{
    FieldLabels, MissingDefinition, RenderError, RenderOptions, RenderSummary, SchemaEditor,
    SUBTYPE_CLASS, SUBTYPE_FIELD_CLASS, SUBTYPE_PROPERTY_CLASS,
};
pub use writer::{HtmlWriter, WriterConfig};
