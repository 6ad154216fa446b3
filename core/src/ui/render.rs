//! Rendering a frame of hexagons onto a canvas.

use crate::grid::{ Frame, Layout };
use crate::ui::canvas::{ Canvas, Rgb };

use nalgebra::Point2;

/// Visual settings for rendering a frame.
#[derive(Clone, Debug)]
pub struct Style {
    pub edge_width: f32,
    pub guide_width: f32,
    pub center_radius: f32,
    pub corner_radius: f32,
    pub center_color: Rgb,
    pub corner_color: Rgb,
    pub edge_color: Rgb,
    pub axis_color: Rgb,
    pub mesh_color: Rgb,
    /// Whether to mark the corners of every hexagon.
    pub show_corners: bool,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            edge_width: 2.,
            guide_width: 1.,
            center_radius: 4.,
            corner_radius: 4.,
            center_color: Rgb(0.5, 0.1, 0.1),
            corner_color: Rgb(0.5, 0.1, 0.1),
            edge_color: Rgb(0.3, 0.3, 0.3),
            axis_color: Rgb(0.3, 0.3, 0.3),
            mesh_color: Rgb(0.5, 0.5, 0.5),
            show_corners: false,
        }
    }
}

/// Replace the contents of the canvas with the frame, centered
/// on the given point.
///
/// The axes are drawn first, followed by each hexagon (filled mesh,
/// outline and center) and finally the guide lines.
pub fn render(canvas: &mut Canvas, center: Point2<f32>, frame: &Frame, style: &Style) -> Layout {
    let layout = Layout::new(center, frame);
    let schema = &frame.schema;

    canvas.clear();

    canvas
        .color(style.axis_color)
        .line(layout.axes(), style.edge_width);

    for &c in layout.centers() {
        canvas
            .color(style.mesh_color)
            .hexagon_mesh(schema, c)
            .color(style.edge_color)
            .hexagon_outline(schema, c, style.edge_width)
            .color(style.center_color)
            .circle(c, style.center_radius);

        if style.show_corners {
            canvas.color(style.corner_color);
            for p in schema.corner_positions(c).iter() {
                canvas.circle(*p, style.corner_radius);
            }
        }
    }

    canvas.color(style.axis_color);
    for guide in layout.guides() {
        canvas.line(&guide.points(), style.guide_width);
    }

    layout
}
