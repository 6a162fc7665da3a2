// Domain layer: numeral models and the ports (interfaces) the pipeline is built on.

pub mod model;
pub mod ports;
