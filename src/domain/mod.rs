// Domain layer: core models, ports (interfaces) and the puzzle algorithms.
// No dependencies beyond std and serde.

pub mod model;
pub mod ports;
pub mod services;
