// core holds the Sierpinski geometry, rasterizer and draw/reset/export pipeline
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod geometry;
pub mod raster;
pub mod render;
pub mod transform;

pub use config::{HexColor, RenderConfig};
pub use controller::{DrawReport, FractalParams, Session, Status, StatusKind, draw_fractal};
pub use error::{FractalError, Result};
pub use export::{PngExport, export_png};
pub use geometry::{Point, Triangle, subdivide, triangle_count};
pub use raster::Canvas;
pub use render::render;
pub use transform::{CoordinateSpace, ViewTransform};

use image::Rgba;

// A resizable 2D raster the renderer can draw into.
// `fill_polygon` closes the path from the last point back to the first.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    // Resizing discards the current contents
    fn resize(&mut self, width: u32, height: u32);
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>);
    fn fill_polygon(&mut self, points: &[Point], color: Rgba<u8>);
}
