//! Pipeline de resolución: (nombre, mapa no tipado) → módulo tipado.
//!
//! El mapa se re-serializa a texto JSON canónico (la forma intermedia) y se
//! decodifica por la función monomorfizada de la entrada del registry. Así
//! el resolver no conoce la forma interna de ningún módulo: conjunto
//! abierto de esquemas, lógica de resolución cerrada.
//!
//! Política de decode, fija:
//! - claves extra se ignoran (compatibilidad hacia adelante);
//! - clave requerida ausente → `Decoding`;
//! - clave presente con tipo equivocado → `Decoding` (serde_json no
//!   convierte entre string y número);
//! - `to_parameters` nunca se invoca aquí; esa es la segunda fase.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::ResolveError;
use crate::modules::trait_module::Module;
use crate::registry::{ModuleRegistry, REGISTRY};

/// Resuelve `module_name` contra el registry global del proceso.
///
/// Cada llamada construye una instancia fresca; la propiedad se transfiere
/// al caller y no se comparte estado mutable entre llamadas.
pub fn from_map(
    module_name: &str,
    config: &HashMap<String, Value>,
) -> Result<Box<dyn Module>, ResolveError> {
    resolve(&REGISTRY, module_name, config)
}

/// Resuelve contra un registry explícito (inyectable en tests).
pub fn resolve(
    registry: &ModuleRegistry,
    module_name: &str,
    config: &HashMap<String, Value>,
) -> Result<Box<dyn Module>, ResolveError> {
    let entry = registry
        .lookup(module_name)
        .ok_or_else(|| ResolveError::UnknownModule(module_name.to_string()))?;

    let encoded = serde_json::to_string(config).map_err(ResolveError::Encoding)?;

    entry.decode(&encoded).map_err(|source| ResolveError::Decoding {
        module: module_name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParameterError;
    use serde_json::json;
    use std::collections::HashMap;

    fn map(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).expect("fixture must be a JSON object")
    }

    #[test]
    fn test_pkg_resolves_with_all_fields() {
        let config = map(json!({
            "name": "nginx",
            "versions": ["1.18.0"],
            "installed": true,
        }));
        let module = from_map("pkg", &config).expect("resolve pkg");
        assert_eq!(module.name(), "pkg");
        let params = module.to_parameters().expect("valid parameters");
        assert_eq!(params["name"], "nginx");
        assert_eq!(params["versions"], json!(["1.18.0"]));
        assert_eq!(params["installed"], true);
    }

    #[test]
    fn test_missing_required_key_is_a_decoding_error() {
        let config = map(json!({ "name": "nginx" }));
        let err = from_map("pkg", &config).unwrap_err();
        assert!(matches!(err, ResolveError::Decoding { ref module, .. } if module == "pkg"));
    }

    #[test]
    fn test_unknown_module_is_reported_as_such() {
        let err = from_map("unknown-module", &HashMap::new()).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownModule(ref name) if name == "unknown-module"));
    }

    #[test]
    fn test_extra_keys_never_fail_the_decode() {
        let config = map(json!({
            "name": "nginx",
            "versions": ["1.18.0"],
            "comment": "added by a newer frontend",
            "priority": 7,
        }));
        assert!(from_map("pkg", &config).is_ok());
    }

    #[test]
    fn test_type_mismatch_on_present_key_fails() {
        let config = map(json!({ "name": "nginx", "versions": "1.18.0" }));
        let err = from_map("pkg", &config).unwrap_err();
        assert!(matches!(err, ResolveError::Decoding { .. }));
    }

    #[test]
    fn test_number_where_string_declared_fails() {
        let config = map(json!({ "name": 42, "versions": ["1.18.0"] }));
        assert!(matches!(
            from_map("pkg", &config).unwrap_err(),
            ResolveError::Decoding { .. }
        ));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let config = map(json!({ "name": "nginx", "versions": ["1.18.0", "1.20.1"] }));
        let first = from_map("pkg", &config).expect("first resolve");
        let second = from_map("pkg", &config).expect("second resolve");
        assert_eq!(
            first.to_parameters().unwrap(),
            second.to_parameters().unwrap()
        );
    }

    #[test]
    fn test_round_trip_preserves_exact_values() {
        let config = map(json!({
            "destination": "10.0.0.1",
            "protocol": "tcp",
            "count": 10,
            "destination_port": 443,
        }));
        let module = from_map("ping", &config).expect("resolve ping");
        let params = module.to_parameters().expect("valid parameters");
        assert_eq!(params["count"], 10);
        assert_eq!(params["destination_port"], 443);
        assert_eq!(params["destination"], "10.0.0.1");
    }

    #[test]
    fn test_two_phase_split_empty_versions() {
        // Decode estructuralmente válido; el fallo llega en to_parameters.
        let config = map(json!({ "name": "nginx", "versions": [] }));
        let module = from_map("pkg", &config).expect("decode must succeed");
        let err = module.to_parameters().unwrap_err();
        assert_eq!(err.field, "versions");
    }

    #[derive(Debug, Default, serde::Deserialize)]
    struct Heartbeat {
        #[serde(default)]
        tag: String,
    }

    impl Module for Heartbeat {
        fn name(&self) -> &'static str {
            "heartbeat"
        }

        fn to_parameters(&self) -> Result<Value, ParameterError> {
            Ok(json!({ "tag": self.tag }))
        }
    }

    #[test]
    fn test_empty_map_against_defaults_only_module() {
        let mut registry = ModuleRegistry::new();
        registry.register::<Heartbeat>();
        let module = resolve(&registry, "heartbeat", &HashMap::new()).expect("zero-field decode");
        assert_eq!(module.to_parameters().unwrap(), json!({ "tag": "" }));
    }
}
