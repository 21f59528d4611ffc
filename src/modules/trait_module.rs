//! Contrato de capacidades para módulos de chequeo.
//!
//! Un `Module` es una unidad de configuración con esquema propio, resuelta
//! por nombre desde el registry. Cada implementación es dueña exclusiva de
//! sus campos; no hay estado base compartido. La validación ocurre en dos
//! fases separadas: estructural (decode, ver `resolver`) y de reglas de
//! negocio (`to_parameters`).

use std::collections::HashMap;
use std::fmt::Debug;

use serde_json::Value;

use crate::errors::ParameterError;

pub trait Module: Debug {
    /// Clave estable y única dentro del registry.
    fn name(&self) -> &'static str;

    /// Descripción breve para diagnósticos de operador.
    fn description(&self) -> &'static str {
        ""
    }

    /// Metadatos declarados de los parámetros que el módulo espera.
    ///
    /// Informativo: el decode nunca consulta estos metadatos. Sirve para
    /// explicar al operador la forma esperada tras un fallo de resolución.
    fn parameter_definitions(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::new()
    }

    /// Valida las reglas de negocio sobre los campos propios y devuelve el
    /// valor de parámetros listo para el campo `parameters` de una
    /// `Operation`. No muta el receptor.
    fn to_parameters(&self) -> Result<Value, ParameterError>;
}

/// Metadatos declarados de un parámetro de módulo.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub description: String,
    pub kind: ParameterKind,
    pub required: bool,
    pub default_value: Option<Value>,
}

/// Tipo JSON declarado de un parámetro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

/// Centinela inerte que nunca representa un módulo resuelto con éxito.
///
/// Su nombre (`"invalid"`) está deliberadamente ausente del registry y su
/// `to_parameters` siempre falla. Existe como valor de relleno para callers
/// que ensamblan un registro de despacho mientras manejan un error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidModule;

impl Module for InvalidModule {
    fn name(&self) -> &'static str {
        "invalid"
    }

    fn description(&self) -> &'static str {
        "Inert placeholder; never a successfully resolved module"
    }

    fn to_parameters(&self) -> Result<Value, ParameterError> {
        Err(ParameterError::new("module", "invalid module carries no parameters"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Bare;

    impl Module for Bare {
        fn name(&self) -> &'static str {
            "bare"
        }

        fn to_parameters(&self) -> Result<Value, ParameterError> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn test_default_metadata_is_empty() {
        let m = Bare;
        assert_eq!(m.description(), "");
        assert!(m.parameter_definitions().is_empty());
    }

    #[test]
    fn test_invalid_module_never_converts() {
        let err = InvalidModule.to_parameters().unwrap_err();
        assert_eq!(err.field, "module");
    }

    #[test]
    fn test_invalid_module_name_is_reserved() {
        assert_eq!(InvalidModule.name(), "invalid");
    }

    #[test]
    fn test_trait_is_object_safe() {
        let boxed: Box<dyn Module> = Box::new(InvalidModule);
        assert_eq!(boxed.name(), "invalid");
    }
}
