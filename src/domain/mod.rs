// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde and the crate's own error type.

pub mod model;
pub mod ports;
