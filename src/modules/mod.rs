pub mod implementations;
pub mod trait_module;

pub use implementations::{FileSearch, Ping, Pkg};
pub use trait_module::{InvalidModule, Module, ParameterDefinition, ParameterKind};
