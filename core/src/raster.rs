use image::{Rgba, RgbaImage};

use crate::Surface;
use crate::geometry::Point;

// In-memory RGBA surface. Polygons are filled by sampling pixel centres
// against the polygon's edge functions, no anti-aliasing.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    // None outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    // Number of pixels exactly equal to `color`
    pub fn count_pixels(&self, color: Rgba<u8>) -> usize {
        self.image.pixels().filter(|p| **p == color).count()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

// > 0 when `p` is on the inner side of a -> b for a positively wound polygon
fn edge(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

// Top-left rule: a centre lying exactly on an edge belongs to the polygon only
// for top or left edges, so shared edges are painted once.
fn owns_boundary(a: Point, b: Point) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dy == 0.0 && dx > 0.0) || dy < 0.0
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, color);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba<u8>) {
        if points.len() < 3 || self.width() == 0 || self.height() == 0 {
            return;
        }

        // shoelace sign; wind the path so inside is positive
        let mut area2 = 0.0;
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            area2 += a.x * b.y - b.x * a.y;
        }
        if area2 == 0.0 || !area2.is_finite() {
            return;
        }
        let mut path = points.to_vec();
        if area2 < 0.0 {
            path.reverse();
        }
        let edges: Vec<(Point, Point)> = (0..path.len())
            .map(|i| (path[i], path[(i + 1) % path.len()]))
            .collect();

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &path {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        // pixel rows/columns whose centres can fall inside the bounding box
        let x0 = (min_x - 0.5).ceil().max(0.0) as u32;
        let y0 = (min_y - 0.5).ceil().max(0.0) as u32;
        let x1 = ((max_x - 0.5).floor() + 1.0).clamp(0.0, self.width() as f64) as u32;
        let y1 = ((max_y - 0.5).floor() + 1.0).clamp(0.0, self.height() as f64) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                let centre = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                let inside = edges.iter().all(|&(a, b)| {
                    let e = edge(a, b, centre);
                    e > 0.0 || (e == 0.0 && owns_boundary(a, b))
                });
                if inside {
                    self.image.put_pixel(px, py, color);
                }
            }
        }
    }
}
