//! Layout of a rectangular arrangement of hexagons within a frame
//! of reference axes and guide lines.

pub use crate::geo::*;

use nalgebra::{ Point2, Vector2 };

/// The frame within which a grid of hexagons is laid out.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The length of the horizontal axis.
    pub x_axis: f32,
    /// The length of the vertical axis.
    pub y_axis: f32,
    pub rows: u16,
    pub cols: u16,
    pub schema: Schema,
}

impl Default for Frame {
    fn default() -> Frame {
        Frame {
            x_axis: 700.,
            y_axis: 400.,
            rows: 2,
            cols: 3,
            schema: Schema::default(),
        }
    }
}

/// A straight line segment.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Segment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

impl Segment {
    pub fn points(&self) -> [Point2<f32>; 2] {
        [self.start, self.end]
    }

    pub fn translate(self, delta: Vector2<f32>) -> Segment {
        Segment { start: self.start + delta, end: self.end + delta }
    }
}

/// The positions of everything that is drawn for a frame,
/// for a particular position of the frame.
#[derive(Clone, Debug)]
pub struct Layout {
    origin: Point2<f32>,
    axes: [Point2<f32>; 3],
    centers: Vec<Point2<f32>>,
    guides: Vec<Segment>,
}

impl Layout {
    /// Lay out the frame centered on the given point.
    pub fn new(center: Point2<f32>, frame: &Frame) -> Layout {
        let origin = center - Vector2::new(frame.x_axis / 2., frame.y_axis / 2.);
        let axes = [
            origin + Vector2::new(frame.x_axis, 0.),
            origin,
            origin + Vector2::new(0., frame.y_axis),
        ];
        Layout {
            origin,
            axes,
            centers: centers(origin, frame),
            guides: guides(origin, frame),
        }
    }

    /// The corner of the frame where the axes meet.
    pub fn origin(&self) -> Point2<f32> {
        self.origin
    }

    /// The axes as a single polyline, from the end of the
    /// horizontal axis through the origin to the end of the
    /// vertical axis.
    pub fn axes(&self) -> &[Point2<f32>; 3] {
        &self.axes
    }

    /// The centers of the hexagons, row by row (pointy-top)
    /// or column by column (flat-top).
    pub fn centers(&self) -> &[Point2<f32>] {
        &self.centers
    }

    /// The guide lines, horizontal lines first.
    pub fn guides(&self) -> &[Segment] {
        &self.guides
    }
}

/// Place the hexagons such that adjacent rows (or columns) interlock,
/// i.e. every odd row (column) is indented by half a step.
fn centers(origin: Point2<f32>, frame: &Frame) -> Vec<Point2<f32>> {
    let s = &frame.schema;
    let base = origin + Vector2::new(s.width() * 0.5, s.height() * 0.5);
    let (rows, cols) = (frame.rows as usize, frame.cols as usize);
    let mut centers = Vec::with_capacity(rows * cols);
    match s.orientation() {
        Orientation::PointyTop => {
            let mut line = base;
            for row in 0 .. rows {
                let mut each = line;
                if row % 2 == 1 {
                    each.x += s.horizontal_step() * 0.5;
                }
                for _ in 0 .. cols {
                    centers.push(each);
                    each.x += s.horizontal_step();
                }
                line.y += s.vertical_step();
            }
        }
        Orientation::FlatTop => {
            let mut line = base;
            for col in 0 .. cols {
                let mut each = line;
                if col % 2 == 1 {
                    each.y += s.vertical_step() * 0.5;
                }
                for _ in 0 .. rows {
                    centers.push(each);
                    each.y += s.vertical_step();
                }
                line.x += s.horizontal_step();
            }
        }
    }
    centers
}

/// The distances between adjacent horizontal and vertical guide lines,
/// such that every corner of a hexagon in the grid lies on a guide line
/// of either kind.
pub fn guide_spacing(schema: &Schema) -> Vector2<f32> {
    match schema.orientation() {
        Orientation::PointyTop => Vector2::new(schema.width() / 2., schema.height() / 4.),
        Orientation::FlatTop => Vector2::new(schema.width() / 4., schema.height() / 2.),
    }
}

fn guides(origin: Point2<f32>, frame: &Frame) -> Vec<Segment> {
    let spacing = guide_spacing(&frame.schema);
    let mut guides = Vec::new();
    if spacing.x <= 0. || spacing.y <= 0. {
        return guides
    }

    let h_line = Segment {
        start: origin,
        end: origin + Vector2::new(frame.x_axis, 0.),
    };
    let v_line = Segment {
        start: origin,
        end: origin + Vector2::new(0., frame.y_axis),
    };
    let rows = (frame.y_axis / spacing.y) as usize;
    let cols = (frame.x_axis / spacing.x) as usize;
    guides.reserve(rows + cols);
    guides.extend((0 .. rows).map(|i| h_line.translate(Vector2::new(0., spacing.y * i as f32))));
    guides.extend((0 .. cols).map(|i| v_line.translate(Vector2::new(spacing.x * i as f32, 0.))));

    guides
}
