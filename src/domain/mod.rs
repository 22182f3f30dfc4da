// Domain layer: record shapes, report shapes and ports (interfaces). No I/O here.

pub mod model;
pub mod ports;
pub mod report;
pub mod sample;
