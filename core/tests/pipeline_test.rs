use image::{ImageFormat, Rgba};
use sierpinski_core::{
    Canvas, CoordinateSpace, FractalError, HexColor, RenderConfig, Session, StatusKind, Surface,
    draw_fractal,
};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn draw_then_export_roundtrip() {
    let mut session = Session::new(RenderConfig::default());
    session.set_order_input("4");
    session.size_input = "96".to_string();

    let mut canvas = Canvas::default();
    let report = session.draw(&mut canvas).expect("draw failed");
    assert_eq!(report.triangles, 81);
    assert_eq!((canvas.width(), canvas.height()), (96, 96));

    // only the two configured colours appear
    let lit = canvas.count_pixels(WHITE);
    let dark = canvas.count_pixels(BLACK);
    assert!(lit > 0);
    assert_eq!(lit + dark, 96 * 96);

    let export = session.export(&canvas).expect("export failed");
    assert_eq!(export.filename, "sierpinski_order4_size96.png");
    let decoded = image::load_from_memory_with_format(&export.bytes, ImageFormat::Png)
        .expect("not a PNG")
        .to_rgba8();
    assert_eq!(&decoded, canvas.image());
}

#[test]
fn rejected_size_keeps_previous_canvas() {
    let config = RenderConfig::default();
    let mut canvas = Canvas::default();
    draw_fractal(&mut canvas, "3", "40", &config).expect("draw failed");
    let before = canvas.clone();

    let err = draw_fractal(&mut canvas, "3", "0", &config).unwrap_err();
    assert!(matches!(err, FractalError::SizeOutOfRange { size: 0, .. }));
    assert_eq!(canvas.image(), before.image());
}

#[test]
fn reset_after_error_draws_defaults() {
    let mut session = Session::new(RenderConfig::default());
    session.set_order_input("abc");
    let mut canvas = Canvas::default();
    assert!(session.draw(&mut canvas).is_err());
    assert_eq!(session.status().map(|s| s.kind), Some(StatusKind::Error));

    session.reset(&mut canvas).expect("reset failed");
    assert_eq!(session.order_input, "5");
    assert_eq!(session.size_input, "600");
    assert!(session.status().is_none());
    assert_eq!(session.triangles_label(), "243");
    assert_eq!((canvas.width(), canvas.height()), (600, 600));
}

#[test]
fn configured_colours_and_space_are_used() {
    let config = RenderConfig {
        coordinate_space: CoordinateSpace::centered(),
        background: HexColor([10, 20, 30]),
        fill: "#ff0000".parse().expect("bad colour"),
        ..RenderConfig::default()
    };
    let mut canvas = Canvas::default();
    draw_fractal(&mut canvas, "2", "64", &config).expect("draw failed");

    let red = Rgba([255, 0, 0, 255]);
    let bg = Rgba([10, 20, 30, 255]);
    assert_eq!(canvas.pixel(0, 0), Some(bg));
    assert_eq!(canvas.pixel(63, 63), Some(bg));
    assert!(canvas.count_pixels(red) > 0);
    assert_eq!(canvas.count_pixels(red) + canvas.count_pixels(bg), 64 * 64);
}

#[test]
fn pixel_and_centered_spaces_differ() {
    let mut pixel = Canvas::default();
    let mut centered = Canvas::default();
    let base = RenderConfig::default();
    let alt = RenderConfig {
        coordinate_space: CoordinateSpace::centered(),
        ..RenderConfig::default()
    };
    draw_fractal(&mut pixel, "3", "80", &base).expect("draw failed");
    draw_fractal(&mut centered, "3", "80", &alt).expect("draw failed");
    assert_ne!(pixel.image(), centered.image());
    assert!(pixel.count_pixels(WHITE) > centered.count_pixels(WHITE));
}
