//! Geometry of regular hexagons in a 2d cartesian coordinate system.

use nalgebra::geometry::Point2;

/// The angle (in degrees) of the equilateral triangles that
/// a regular hexagon is composed of, i.e. 60 degrees.
pub const WEDGE_ANGLE_DEGREES: f32 = 60.0;

/// The number of corners of a hexagon.
pub const CORNERS: u8 = 6;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Orientation {
    FlatTop,
    PointyTop
}

impl Default for Orientation {
    fn default() -> Orientation {
        Orientation::PointyTop
    }
}

impl Orientation {
    /// The angle (in degrees) of the first corner.
    pub fn base_angle_degrees(self) -> f32 {
        match self {
            Orientation::FlatTop => 0.,
            Orientation::PointyTop => WEDGE_ANGLE_DEGREES / 2.,
        }
    }

    /// The polar angle (in degrees) of the `i`-th corner relative
    /// to the center of a hexagon.
    pub fn corner_angle_degrees(self, i: u8) -> f32 {
        self.base_angle_degrees() + WEDGE_ANGLE_DEGREES * i as f32
    }

    pub fn corner_angle_radians(self, i: u8) -> f32 {
        self.corner_angle_degrees(i).to_radians()
    }

    /// The polar angles (in degrees) of all six corners.
    pub fn corner_angles(self) -> [f32; 6] {
        [ self.corner_angle_degrees(0)
        , self.corner_angle_degrees(1)
        , self.corner_angle_degrees(2)
        , self.corner_angle_degrees(3)
        , self.corner_angle_degrees(4)
        , self.corner_angle_degrees(5)
        ]
    }
}

/// The length of the sides of a hexagon, which is also the
/// distance from its center to each of its corners.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct EdgeLength(pub f32);

/// A corner of a hexagon together with the direction from the
/// center to the corner as texture coordinates, i.e. `(u, v)`
/// is the unit vector `(cos θ, sin θ)` of the corner angle `θ`.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
}

impl Vertex {
    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// The position of the `i`-th corner of a hexagon with the given
/// center and edge length.
pub fn corner_position(
    orientation: Orientation,
    center: Point2<f32>,
    size: f32,
    i: u8
) -> Point2<f32> {
    let angle_rad = orientation.corner_angle_radians(i);
    Point2::new(
        center.x + size * angle_rad.cos(),
        center.y + size * angle_rad.sin())
}

/// Like [`corner_position`] but also carrying the direction of
/// the corner, for use in a triangle fan.
pub fn corner_vertex(
    orientation: Orientation,
    center: Point2<f32>,
    size: f32,
    i: u8
) -> Vertex {
    let angle_rad = orientation.corner_angle_radians(i);
    let (sin, cos) = angle_rad.sin_cos();
    Vertex {
        x: center.x + size * cos,
        y: center.y + size * sin,
        u: cos,
        v: sin,
    }
}

/// A schematic for a regular hexagon.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) edge: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) horizontal_step: f32,
    pub(crate) vertical_step: f32,
    pub(crate) orientation: Orientation,
}

impl Default for Schema {
    fn default() -> Schema {
        Schema::new(EdgeLength(100.), Orientation::PointyTop)
    }
}

impl Schema {
    pub fn new(EdgeLength(edge): EdgeLength, orientation: Orientation) -> Schema {
        match orientation {
            Orientation::FlatTop => {
                let width = 2.0 * edge;
                let height = f32::sqrt(3.0) * edge;
                Schema {
                    edge,
                    width,
                    height,
                    horizontal_step: width * 0.75,
                    vertical_step: height,
                    orientation,
                }
            }
            Orientation::PointyTop => {
                let height = 2.0 * edge;
                let width = f32::sqrt(3.0) / 2.0 * height;
                Schema {
                    edge,
                    width,
                    height,
                    horizontal_step: width,
                    vertical_step: height * 0.75,
                    orientation,
                }
            }
        }
    }

    pub fn edge(&self) -> f32 {
        self.edge
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The horizontal distance between the centers of two hexagons
    /// that are adjacent in a row.
    pub fn horizontal_step(&self) -> f32 {
        self.horizontal_step
    }

    /// The vertical distance between the centers of two hexagons
    /// in adjacent rows.
    pub fn vertical_step(&self) -> f32 {
        self.vertical_step
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn corner_position(&self, center: Point2<f32>, i: u8) -> Point2<f32> {
        corner_position(self.orientation, center, self.edge, i)
    }

    pub fn corner_vertex(&self, center: Point2<f32>, i: u8) -> Vertex {
        corner_vertex(self.orientation, center, self.edge, i)
    }

    pub fn corner_positions(&self, center: Point2<f32>) -> [Point2<f32>; 6] {
        [ self.corner_position(center, 0)
        , self.corner_position(center, 1)
        , self.corner_position(center, 2)
        , self.corner_position(center, 3)
        , self.corner_position(center, 4)
        , self.corner_position(center, 5)
        ]
    }

    pub fn corner_vertices(&self, center: Point2<f32>) -> [Vertex; 6] {
        [ self.corner_vertex(center, 0)
        , self.corner_vertex(center, 1)
        , self.corner_vertex(center, 2)
        , self.corner_vertex(center, 3)
        , self.corner_vertex(center, 4)
        , self.corner_vertex(center, 5)
        ]
    }

    pub fn hexagon(&self, center: Point2<f32>) -> Hexagon {
        Hexagon {
            center,
            corners: self.corner_positions(center),
        }
    }

    /// Compute the rectangular bounds of a hexagon.
    pub fn bounds(&self, h: &Hexagon) -> Bounds {
        Bounds {
            position: Point2::new(
                h.center.x - self.width / 2.,
                h.center.y - self.height / 2.),
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Hexagon {
    pub(crate) center: Point2<f32>,
    pub(crate) corners: [Point2<f32>; 6],
}

impl Hexagon {
    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    pub fn corners(&self) -> &[Point2<f32>; 6] {
        &self.corners
    }
}

/// An axis-aligned rectangle.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Bounds {
    pub position: Point2<f32>,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, p: Point2<f32>) -> bool {
        self.position.x <= p.x && p.x <= self.position.x + self.width &&
        self.position.y <= p.y && p.y <= self.position.y + self.height
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use nalgebra::distance;
    use quickcheck::*;
    use rand::Rng;

    const EPSILON: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPSILON * f32::max(1., b.abs())
    }

    impl Arbitrary for Orientation {
        fn arbitrary<G: Gen>(g: &mut G) -> Orientation {
            if g.gen() {
                Orientation::FlatTop
            } else {
                Orientation::PointyTop
            }
        }
    }

    impl Arbitrary for EdgeLength {
        fn arbitrary<G: Gen>(g: &mut G) -> EdgeLength {
            EdgeLength(g.gen_range(0.5, 500.))
        }
    }

    #[derive(Clone, Copy, Debug)]
    pub(crate) struct Center(pub Point2<f32>);

    impl Arbitrary for Center {
        fn arbitrary<G: Gen>(g: &mut G) -> Center {
            Center(Point2::new(g.gen_range(-1000., 1000.), g.gen_range(-1000., 1000.)))
        }
    }

    #[test]
    fn pointy_top_corner_angles() {
        let angles = Orientation::PointyTop.corner_angles();
        assert_eq!(angles, [30., 90., 150., 210., 270., 330.]);
    }

    #[test]
    fn flat_top_corner_angles() {
        let angles = Orientation::FlatTop.corner_angles();
        assert_eq!(angles, [0., 60., 120., 180., 240., 300.]);
    }

    #[test]
    fn first_corner_of_unit_hexagon() {
        let schema = Schema::default();
        let c = schema.corner_position(Point2::origin(), 0);
        assert!(approx(c.x, 86.60254), "{:?}", c);
        assert!(approx(c.y, 50.), "{:?}", c);
    }

    #[test]
    fn pointy_top_measurements() {
        let schema = Schema::new(EdgeLength(100.), Orientation::PointyTop);
        assert_eq!(schema.height(), 200.);
        assert_eq!(schema.vertical_step(), 150.);
        assert!(approx(schema.width(), 173.20508));
        assert_eq!(schema.horizontal_step(), schema.width());
    }

    #[test]
    fn flat_top_measurements() {
        let schema = Schema::new(EdgeLength(100.), Orientation::FlatTop);
        assert_eq!(schema.width(), 200.);
        assert_eq!(schema.horizontal_step(), 150.);
        assert!(approx(schema.height(), 173.20508));
        assert_eq!(schema.vertical_step(), schema.height());
    }

    #[test]
    fn degenerate_edge_length() {
        let schema = Schema::new(EdgeLength(0.), Orientation::PointyTop);
        let center = Point2::new(3., 4.);
        assert!(schema.corner_positions(center).iter().all(|c| *c == center));
        assert_eq!(schema.width(), 0.);
    }

    #[test]
    fn prop_corners_at_edge_distance() {
        fn prop(o: Orientation, e: EdgeLength, c: Center) -> bool {
            let s = Schema::new(e, o);
            s.corner_positions(c.0).iter().all(|p| approx(distance(&c.0, p), e.0))
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn prop_measurements() {
        fn prop(e: EdgeLength) -> bool {
            let s = Schema::new(e, Orientation::PointyTop);
            approx(s.height(), 2. * e.0)
                && approx(s.width(), f32::sqrt(3.) * e.0)
                && approx(s.vertical_step(), 1.5 * e.0)
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_angles_independent_of_size() {
        fn prop(o: Orientation, e: EdgeLength, c: Center) -> bool {
            let s = Schema::new(e, o);
            s.corner_positions(c.0).iter().enumerate().all(|(i, p)| {
                let d = p - c.0;
                let angle = d.y.atan2(d.x).to_degrees().rem_euclid(360.);
                let expected = o.corner_angle_degrees(i as u8);
                let delta = (angle - expected).abs();
                delta < 0.1 || (360. - delta) < 0.1
            })
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn prop_vertex_matches_position() {
        fn prop(o: Orientation, e: EdgeLength, c: Center) -> bool {
            let s = Schema::new(e, o);
            (0 .. CORNERS).all(|i| {
                let v = s.corner_vertex(c.0, i);
                let p = s.corner_position(c.0, i);
                approx(v.x, p.x) && approx(v.y, p.y)
                    && approx(v.u * v.u + v.v * v.v, 1.)
                    && approx(c.0.x + e.0 * v.u, v.x)
                    && approx(c.0.y + e.0 * v.v, v.y)
            })
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn prop_bounds_contain_corners() {
        fn prop(o: Orientation, e: EdgeLength, c: Center) -> bool {
            let s = Schema::new(e, o);
            let h = s.hexagon(c.0);
            let b = s.bounds(&h);
            let slack = Bounds {
                position: b.position - nalgebra::Vector2::new(0.01, 0.01) * e.0,
                width: b.width * 1.01,
                height: b.height * 1.01,
            };
            h.corners().iter().all(|p| slack.contains(*p)) && b.contains(h.center())
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }
}
