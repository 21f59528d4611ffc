use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ParameterError;
use crate::modules::trait_module::{Module, ParameterDefinition, ParameterKind};

/// Chequeo de paquetes instalados en el host remoto.
///
/// `name` y `versions` son obligatorios en el decode; `installed` tiene
/// default `false`. Que `versions` no esté vacío es regla de negocio, no
/// estructural: un decode con `versions: []` es válido y el fallo se
/// difiere a `to_parameters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pkg {
    pub name: String,
    pub versions: Vec<String>,
    #[serde(default)]
    pub installed: bool,
}

impl Module for Pkg {
    fn name(&self) -> &'static str {
        "pkg"
    }

    fn description(&self) -> &'static str {
        "Check packages on the target host against expected versions"
    }

    fn parameter_definitions(&self) -> HashMap<String, ParameterDefinition> {
        let mut m = HashMap::new();
        m.insert(
            "name".into(),
            ParameterDefinition {
                description: "Package name to look up".into(),
                kind: ParameterKind::String,
                required: true,
                default_value: None,
            },
        );
        m.insert(
            "versions".into(),
            ParameterDefinition {
                description: "Acceptable package versions".into(),
                kind: ParameterKind::Array,
                required: true,
                default_value: None,
            },
        );
        m.insert(
            "installed".into(),
            ParameterDefinition {
                description: "Whether the package is expected to be present".into(),
                kind: ParameterKind::Boolean,
                required: false,
                default_value: Some(Value::Bool(false)),
            },
        );
        m
    }

    fn to_parameters(&self) -> Result<Value, ParameterError> {
        if self.name.trim().is_empty() {
            return Err(ParameterError::new("name", "package name must not be empty"));
        }
        if self.versions.is_empty() {
            return Err(ParameterError::new(
                "versions",
                "at least one acceptable version is required",
            ));
        }
        if self.versions.iter().any(|v| v.trim().is_empty()) {
            return Err(ParameterError::new("versions", "version entries must not be empty"));
        }
        Ok(json!({
            "name": self.name,
            "versions": self.versions,
            "installed": self.installed,
        }))
    }
}
