//! A retained list of drawing instructions.

use crate::buffer;
use crate::geo::Schema;

use nalgebra::Point2;

/// An opaque color with components in the unit interval.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Rgb(pub f32, pub f32, pub f32);

#[derive(PartialEq, Clone, Debug)]
pub enum Instruction {
    /// Use the given color for all subsequent instructions.
    Color(Rgb),
    /// A polyline through the points of a flat `[x0, y0, x1, y1, ...]` buffer.
    Line { points: Vec<f32>, width: f32 },
    /// A filled triangle fan over a flat `[x0, y0, u0, v0, ...]` buffer.
    Mesh { vertices: Vec<f32>, indices: Vec<u32> },
    /// A filled circle.
    Circle { center: Point2<f32>, radius: f32 },
}

/// An ordered list of drawing instructions that a backend replays
/// in order.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    instructions: Vec<Instruction>,
}

impl Canvas {
    pub fn new() -> Canvas {
        Canvas::default()
    }

    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn color(&mut self, color: Rgb) -> &mut Canvas {
        self.instructions.push(Instruction::Color(color));
        self
    }

    /// An open polyline through the given points.
    pub fn line(&mut self, points: &[Point2<f32>], width: f32) -> &mut Canvas {
        self.instructions.push(Instruction::Line {
            points: buffer::line_points(points),
            width,
        });
        self
    }

    /// A filled hexagon, as a triangle fan over its corners.
    pub fn hexagon_mesh(&mut self, schema: &Schema, center: Point2<f32>) -> &mut Canvas {
        let corners = schema.corner_vertices(center);
        self.instructions.push(Instruction::Mesh {
            vertices: buffer::mesh_vertices(&corners),
            indices: buffer::fan_indices(corners.len()),
        });
        self
    }

    /// The outline of a hexagon, as a closed polyline through its corners.
    pub fn hexagon_outline(&mut self, schema: &Schema, center: Point2<f32>, width: f32) -> &mut Canvas {
        let corners = schema.corner_positions(center);
        self.instructions.push(Instruction::Line {
            points: buffer::closed_line_points(&corners),
            width,
        });
        self
    }

    pub fn circle(&mut self, center: Point2<f32>, radius: f32) -> &mut Canvas {
        self.instructions.push(Instruction::Circle { center, radius });
        self
    }
}
