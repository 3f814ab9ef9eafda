// Domain layer: lesson models and ports. No terminal or runtime dependencies.

pub mod model;
pub mod ports;
