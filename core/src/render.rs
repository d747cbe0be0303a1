use image::Rgba;

use crate::Surface;
use crate::geometry::Triangle;
use crate::transform::ViewTransform;

// Fill every triangle in `fill` after mapping it through `view`.
// Returns how many triangles were issued to the surface.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    triangles: &[Triangle],
    fill: Rgba<u8>,
    view: &ViewTransform,
) -> usize {
    for t in triangles {
        let mapped = view.apply_triangle(t);
        surface.fill_polygon(&mapped.vertices(), fill);
    }
    triangles.len()
}
