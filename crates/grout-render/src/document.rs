use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Parameter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// YAML for `.yaml`/`.yml`, JSON for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

#[derive(Debug)]
pub enum DocumentError {
    Io { path: PathBuf, error: std::io::Error },
    Json(serde_json::Error),
    Yaml(serde_yaml_bw::Error),
}

impl Parameter {
    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml_bw::from_str(source)?)
    }

    pub fn from_str_with_format(
        source: &str,
        format: DocumentFormat,
    ) -> Result<Self, DocumentError> {
        match format {
            DocumentFormat::Json => Self::from_json_str(source),
            DocumentFormat::Yaml => Self::from_yaml_str(source),
        }
    }
}

pub fn load_parameter<P>(path: P) -> Result<Parameter, DocumentError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|error| DocumentError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    Parameter::from_str_with_format(&source, DocumentFormat::from_path(path))
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io { path, error } => {
                write!(f, "failed to read {}: {error}", path.display())
            }
            DocumentError::Json(error) => write!(f, "invalid JSON parameter document: {error}"),
            DocumentError::Yaml(error) => write!(f, "invalid YAML parameter document: {error}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DocumentError::Io { error, .. } => Some(error),
            DocumentError::Json(error) => Some(error),
            DocumentError::Yaml(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(value: serde_json::Error) -> Self {
        DocumentError::Json(value)
    }
}

impl From<serde_yaml_bw::Error> for DocumentError {
    fn from(value: serde_yaml_bw::Error) -> Self {
        DocumentError::Yaml(value)
    }
}
