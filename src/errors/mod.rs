pub mod parameter_error;
pub mod resolve_error;

pub use parameter_error::ParameterError;
pub use resolve_error::ResolveError;
