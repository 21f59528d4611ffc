use thiserror::Error;

/// Violación de una regla de negocio durante `to_parameters`.
///
/// El campo era estructuralmente válido (el decode lo aceptó) pero su valor
/// no cumple las reglas propias del módulo: rangos, enumeraciones o
/// restricciones cruzadas entre campos.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid parameter `{field}`: {reason}")]
pub struct ParameterError {
    pub field: &'static str,
    pub reason: String,
}

impl ParameterError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self { field, reason: reason.into() }
    }
}
