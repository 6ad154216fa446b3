//! Flat coordinate buffers, as consumed by line and mesh drawing
//! primitives.

use crate::geo::Vertex;

use nalgebra::Point2;

fn coords<'a>(points: &'a [Point2<f32>]) -> impl Iterator<Item=f32> + 'a {
    points.iter().flat_map(|p| vec![p.x, p.y])
}

/// Flatten the points of an open polyline into `[x0, y0, x1, y1, ...]`.
pub fn line_points(points: &[Point2<f32>]) -> Vec<f32> {
    coords(points).collect()
}

/// Flatten the points of a closed polyline, i.e. like [`line_points`]
/// but repeating the first point at the end.
pub fn closed_line_points(points: &[Point2<f32>]) -> Vec<f32> {
    coords(points).chain(coords(&points[.. points.len().min(1)])).collect()
}

/// Flatten mesh vertices into `[x0, y0, u0, v0, x1, y1, u1, v1, ...]`.
pub fn mesh_vertices(vertices: &[Vertex]) -> Vec<f32> {
    vertices.iter().flat_map(|v| vec![v.x, v.y, v.u, v.v]).collect()
}

/// The indices of a triangle fan over `n` vertices.
pub fn fan_indices(n: usize) -> Vec<u32> {
    (0 .. n as u32).collect()
}

/// Expand the indices of a triangle fan into the indices of a
/// triangle list. All triangles share the first index.
pub fn fan_triangles(fan: &[u32]) -> Vec<u32> {
    match fan.split_first() {
        Some((&first, rest)) => rest
            .windows(2)
            .flat_map(|w| vec![first, w[0], w[1]])
            .collect(),
        None => Vec::new()
    }
}
