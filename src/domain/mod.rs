// Domain layer: the resume document model and the ports front ends plug into.

pub mod model;
pub mod ports;
