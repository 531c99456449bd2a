// Domain layer: core models, built-in seed content, and ports (interfaces).
// No dependencies on adapters or application logic.

pub mod model;
pub mod ports;
pub mod seed;
