use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Triangle};

const DEFAULT_MARGIN: f64 = 0.8;

// Where the order-0 triangle is defined before subdivision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CoordinateSpace {
    // Directly in pixels: apex at top centre, base along the bottom edge
    #[default]
    Pixel,
    // Equilateral triangle of circumradius 1 around the origin, y up,
    // fitted into the surface with `margin` (0, 1] of the half-size
    Centered {
        #[serde(default = "default_margin")]
        margin: f64,
    },
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

impl CoordinateSpace {
    pub fn centered() -> Self {
        CoordinateSpace::Centered {
            margin: DEFAULT_MARGIN,
        }
    }

    // The order-0 triangle for a size x size surface, in this space's coordinates.
    // Vertex order is bottom-left, apex, bottom-right in both spaces.
    pub fn initial_triangle(&self, size: u32) -> Triangle {
        match self {
            CoordinateSpace::Pixel => {
                let s = size as f64;
                Triangle::new(
                    Point::new(0.0, s),
                    Point::new(s / 2.0, 0.0),
                    Point::new(s, s),
                )
            }
            CoordinateSpace::Centered { .. } => {
                let half_base = 3f64.sqrt() / 2.0;
                Triangle::new(
                    Point::new(-half_base, -0.5),
                    Point::new(0.0, 1.0),
                    Point::new(half_base, -0.5),
                )
            }
        }
    }

    // Transform taking this space's coordinates into pixels
    pub fn view_transform(&self, size: u32) -> ViewTransform {
        match self {
            CoordinateSpace::Pixel => ViewTransform::identity(),
            CoordinateSpace::Centered { margin } => ViewTransform::fit(size, *margin),
        }
    }
}

// Uniform scale + translation, optionally flipping y (math space grows up,
// pixel space grows down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: Point,
    pub flip_y: bool,
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Point::new(0.0, 0.0),
            flip_y: false,
        }
    }

    // Map the unit disc onto a size x size surface, shrunk by `margin`
    pub fn fit(size: u32, margin: f64) -> Self {
        let half = size as f64 / 2.0;
        Self {
            scale: half * margin,
            offset: Point::new(half, half),
            flip_y: true,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        let y = if self.flip_y { -p.y } else { p.y };
        Point::new(self.offset.x + p.x * self.scale, self.offset.y + y * self.scale)
    }

    pub fn apply_triangle(&self, t: &Triangle) -> Triangle {
        t.map(|p| self.apply(p))
    }
}
