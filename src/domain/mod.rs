// Domain layer: the status line model and the Script port.

pub mod model;
pub mod ports;
