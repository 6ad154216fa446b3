//! Backend-independent drawing of a hexagon grid.

pub mod canvas;
pub mod render;
