use thiserror::Error;

/// Errores de la fase de resolución (`from_map`).
///
/// Todos son deterministas respecto al input: reintentar con el mismo mapa
/// reproduce exactamente el mismo error. Ninguno es fatal; el caller decide
/// cómo recuperarse (p. ej. listar los nombres válidos del registry).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// El nombre solicitado no existe en el registry. Resultado normal,
    /// no un error interno.
    #[error("not a recognized module: {0}")]
    UnknownModule(String),

    /// El mapa de configuración no pudo serializarse a la forma intermedia.
    #[error("configuration map could not be encoded: {0}")]
    Encoding(#[source] serde_json::Error),

    /// La forma intermedia no encaja en el esquema del módulo: falta una
    /// clave requerida o una clave presente tiene el tipo equivocado.
    #[error("configuration for module `{module}` does not match its schema: {source}")]
    Decoding {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}
