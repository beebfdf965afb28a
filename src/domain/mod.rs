// Domain layer: export request model and the output port.

pub mod model;
pub mod ports;
