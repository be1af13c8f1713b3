// Domain layer: request and result models shared by the CLI and batch surfaces.

pub mod model;
