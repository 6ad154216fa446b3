
use hexgrid::ui::canvas::Rgb;

use ggez::graphics::Color;

/// Convert a canvas color into an opaque ggez color.
pub fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::new(r, g, b, 1.)
}

pub mod mesh {
    use super::*;

    use hexgrid::buffer;
    use hexgrid::ui::canvas::{ Canvas, Instruction };

    use ggez::{ Context, GameResult };
    use ggez::graphics::{ DrawMode, Mesh, MeshBuilder, MeshData, Vertex };
    use nalgebra::Point2;

    /// The tolerance for the tessellation of circles.
    const TOLERANCE: f32 = 0.1;

    /// Chunk a flat `[x0, y0, x1, y1, ...]` buffer into points.
    /// A trailing odd coordinate is ignored.
    pub fn points(buf: &[f32]) -> Vec<Point2<f32>> {
        buf.chunks_exact(2).map(|c| Point2::new(c[0], c[1])).collect()
    }

    /// Chunk a flat `[x0, y0, u0, v0, ...]` buffer into vertices of
    /// the given color.
    pub fn vertices(buf: &[f32], color: Color) -> Vec<Vertex> {
        let color: [f32; 4] = color.into();
        buf.chunks_exact(4).map(|c| Vertex {
            position: [c[0], c[1]],
            uv: [c[2], c[3]],
            color,
        }).collect()
    }

    /// Build the meshes for the instructions of a canvas, one mesh per
    /// drawing instruction, in the order they are to be drawn.
    pub fn build(ctx: &Context, canvas: &Canvas) -> GameResult<Vec<Mesh>> {
        let mut meshes = Vec::with_capacity(canvas.instructions().len());
        let mut color = Color::WHITE;
        for instr in canvas.instructions() {
            match instr {
                Instruction::Color(rgb) => {
                    color = super::color(*rgb);
                }
                Instruction::Line { points: buf, width } => {
                    let ps = points(buf);
                    if ps.len() < 2 {
                        log::warn!("Skipping line with {} point(s)", ps.len());
                        continue
                    }
                    let mut mb = MeshBuilder::new();
                    mb.line(&ps, *width, color)?;
                    meshes.push(Mesh::from_data(ctx, mb.build()));
                }
                Instruction::Mesh { vertices: buf, indices } => {
                    let vs = vertices(buf, color);
                    let triangles = buffer::fan_triangles(indices);
                    if triangles.is_empty() {
                        log::warn!("Skipping mesh with {} vertices", vs.len());
                        continue
                    }
                    meshes.push(Mesh::from_data(ctx, MeshData {
                        vertices: &vs,
                        indices: &triangles,
                    }));
                }
                Instruction::Circle { center, radius } => {
                    let mut mb = MeshBuilder::new();
                    mb.circle(DrawMode::fill(), *center, *radius, TOLERANCE, color)?;
                    meshes.push(Mesh::from_data(ctx, mb.build()));
                }
            }
        }
        log::debug!("Built {} meshes from {} instructions",
            meshes.len(), canvas.instructions().len());
        Ok(meshes)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn chunk_points() {
            let ps = points(&[1., 2., 3., 4., 5.]);
            assert_eq!(ps, vec![Point2::new(1., 2.), Point2::new(3., 4.)]);
        }

        #[test]
        fn chunk_vertices() {
            let red = Color::new(1., 0., 0., 1.);
            let vs = vertices(&[1., 2., 0.5, -0.5, 3., 4., 1., 0.], red);
            assert_eq!(vs.len(), 2);
            assert_eq!(vs[0].position, [1., 2.]);
            assert_eq!(vs[0].uv, [0.5, -0.5]);
            assert_eq!(vs[1].position, [3., 4.]);
            assert_eq!(vs[1].color, [1., 0., 0., 1.]);
        }
    }
}
