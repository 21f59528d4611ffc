//! ModFlow Rust Library
//!
//! Este crate es la frontera tipada entre configuración JSON no tipada y el
//! pipeline de despacho de acciones hacia agentes remotos:
//! - Expone `modules` con el contrato de capacidades y el catálogo.
//! - Expone `registry` con la tabla fija nombre → módulo.
//! - Expone `resolver` con `from_map` para resolver parámetros.
//! - Expone `dispatch` con los registros de cable `Action`/`Operation`.
//!
//! La resolución es síncrona y puramente funcional: sin I/O, sin estado
//! mutable compartido entre llamadas.

pub mod dispatch;
pub mod errors;
pub mod modules;
pub mod registry;
pub mod resolver;

pub use dispatch::{Action, Operation};
pub use errors::{ParameterError, ResolveError};
pub use modules::{FileSearch, InvalidModule, Module, ParameterDefinition, ParameterKind, Ping, Pkg};
pub use registry::{ModuleRegistry, REGISTRY};
pub use resolver::{from_map, resolve};
