// Renders orders 0..=6 at 256×256 and saves each as sierpinski_order<N>_size256.png

use sierpinski_core::{Canvas, RenderConfig, Session};

fn main() {
    let mut session = Session::new(RenderConfig::default());
    session.size_input = "256".to_string();
    let mut canvas = Canvas::default();

    for order in 0..=6 {
        session.set_order_input(order.to_string());
        let report = session.draw(&mut canvas).unwrap();
        let export = session.export(&canvas).unwrap();
        let path = export.save(&export.filename).unwrap();
        println!(
            "Saved {} ({} triangles, {:.2} ms)",
            path.display(),
            report.triangles,
            report.elapsed.as_secs_f64() * 1000.0
        );
    }
}
