//! Hexagon size and spacing: the geometry of regular hexagons, the
//! flat coordinate buffers that canvas primitives consume and the
//! layout of an interlocking grid of hexagons.

pub mod buffer;
pub mod geo;
pub mod grid;
pub mod ui;
