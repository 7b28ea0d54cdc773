// Domain layer: listing models, remote row shapes and ports.

pub mod model;
pub mod ports;
pub mod rows;
