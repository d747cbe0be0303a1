// Draws the same order in both coordinate spaces and prints a coarse
// ASCII preview of each, then saves them side by side as PNGs.

use sierpinski_core::{Canvas, CoordinateSpace, RenderConfig, Surface, draw_fractal, export_png};

fn preview(canvas: &Canvas, step: u32) {
    for y in (0..canvas.height()).step_by(step as usize) {
        for x in (0..canvas.width()).step_by(step as usize) {
            let lit = canvas.pixel(x, y).is_some_and(|p| p.0[0] > 127);
            print!("{}", if lit { '#' } else { ' ' });
        }
        println!();
    }
}

fn main() {
    let spaces = [
        ("pixel", CoordinateSpace::Pixel),
        ("centered", CoordinateSpace::centered()),
    ];

    for (name, space) in spaces {
        let config = RenderConfig {
            coordinate_space: space,
            ..RenderConfig::default()
        };
        let mut canvas = Canvas::default();
        let report = draw_fractal(&mut canvas, "4", "256", &config).unwrap();

        println!("{} space, {} triangles:", name, report.triangles);
        preview(&canvas, 8);

        let mut export = export_png(&canvas, &report.params).unwrap();
        export.filename = format!("{}_{}", name, export.filename);
        export.save(&export.filename).unwrap();
        println!("Saved {}", export.filename);
    }
}
