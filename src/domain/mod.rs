// Domain layer: scan models and ports. No dependencies on the front-ends.

pub mod model;
pub mod ports;
