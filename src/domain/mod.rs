// Domain layer: tenant / payload models and ports (interfaces).

pub mod model;
pub mod ports;
