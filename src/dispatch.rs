//! Registros de cable `Action`/`Operation` (frontera de despacho).
//!
//! Formas que viajan hacia el agente remoto. Este crate solo las construye
//! y serializa; el transporte y la ejecución viven fuera.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::ParameterError;
use crate::modules::trait_module::Module;

/// Una operación: nombre de módulo + parámetros ya validados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub module: String,
    pub parameters: Value,
}

impl Operation {
    /// Construye la operación invocando `to_parameters` del módulo.
    ///
    /// Aquí es donde un módulo estructuralmente válido todavía puede fallar
    /// por reglas de negocio; el error nombra el campo ofensor.
    pub fn from_module(module: &dyn Module) -> Result<Self, ParameterError> {
        Ok(Self {
            module: module.name().to_string(),
            parameters: module.to_parameters()?,
        })
    }
}

/// Acción despachable: objetivo, ventana de validez y operaciones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: Uuid,
    pub name: String,
    pub target: String,
    pub valid_from: DateTime<Utc>,
    pub expire_after: DateTime<Utc>,
    pub operations: Vec<Operation>,
}

impl Action {
    /// Acción vacía con id v4 fresco y la ventana de validez indicada.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        valid_from: DateTime<Utc>,
        expire_after: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target: target.into(),
            valid_from,
            expire_after,
            operations: Vec::new(),
        }
    }

    /// Añade una operación resuelta desde un módulo ya decodificado.
    pub fn push_module(&mut self, module: &dyn Module) -> Result<(), ParameterError> {
        self.operations.push(Operation::from_module(module)?);
        Ok(())
    }
}
