use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ParameterError;
use crate::modules::trait_module::{Module, ParameterDefinition, ParameterKind};

/// Búsqueda de ficheros por nombre o contenido en el host remoto.
///
/// Solo `paths` es obligatorio en el decode. Que exista al menos un patrón
/// (`names` o `contents`) es regla de negocio diferida a `to_parameters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSearch {
    pub paths: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub contents: Vec<String>,
    #[serde(default)]
    pub max_depth: Option<u32>,
}

impl Module for FileSearch {
    fn name(&self) -> &'static str {
        "file"
    }

    fn description(&self) -> &'static str {
        "Search the target filesystem by file name or content patterns"
    }

    fn parameter_definitions(&self) -> HashMap<String, ParameterDefinition> {
        let mut m = HashMap::new();
        m.insert(
            "paths".into(),
            ParameterDefinition {
                description: "Directories to search from".into(),
                kind: ParameterKind::Array,
                required: true,
                default_value: None,
            },
        );
        m.insert(
            "names".into(),
            ParameterDefinition {
                description: "File name regexes".into(),
                kind: ParameterKind::Array,
                required: false,
                default_value: Some(json!([])),
            },
        );
        m.insert(
            "contents".into(),
            ParameterDefinition {
                description: "File content regexes".into(),
                kind: ParameterKind::Array,
                required: false,
                default_value: Some(json!([])),
            },
        );
        m.insert(
            "max_depth".into(),
            ParameterDefinition {
                description: "Traversal depth bound".into(),
                kind: ParameterKind::Number,
                required: false,
                default_value: None,
            },
        );
        m
    }

    fn to_parameters(&self) -> Result<Value, ParameterError> {
        if self.paths.is_empty() {
            return Err(ParameterError::new("paths", "at least one search path is required"));
        }
        if self.paths.iter().any(|p| p.trim().is_empty()) {
            return Err(ParameterError::new("paths", "search paths must not be empty"));
        }
        if self.names.is_empty() && self.contents.is_empty() {
            return Err(ParameterError::new(
                "names",
                "at least one name or content pattern is required",
            ));
        }
        if self.max_depth == Some(0) {
            return Err(ParameterError::new("max_depth", "must be greater than zero"));
        }
        Ok(json!({
            "paths": self.paths,
            "names": self.names,
            "contents": self.contents,
            "max_depth": self.max_depth,
        }))
    }
}
