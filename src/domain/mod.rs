// Domain layer: statistics models and the provider/config ports.

pub mod model;
pub mod ports;
