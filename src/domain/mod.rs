// Domain layer: gallery models and the filesystem port. No framework types here.

pub mod model;
pub mod ports;
