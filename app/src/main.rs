use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{Color32, ColorImage, TextureHandle, Vec2};
use sierpinski_core::{Canvas, DrawReport, RenderConfig, Session, Status, Surface};

#[derive(Parser, Debug)]
#[command(name = "sierpinski", about = "Draw and export Sierpinski triangles")]
struct Cli {
    /// Recursion order (defaults to the config's default_order)
    #[arg(long, allow_hyphen_values = true)]
    order: Option<String>,

    /// Image width and height in pixels
    #[arg(long, allow_hyphen_values = true)]
    size: Option<String>,

    /// JSON render config (colours, coordinate space, limits)
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Render once and write a PNG here instead of opening a window.
    /// A directory receives sierpinski_order<N>_size<S>.png
    #[arg(long, value_name = "PNG")]
    export: Option<PathBuf>,
}

struct SierpinskiApp {
    session: Session,
    canvas: Canvas,
    // slider value, mirrored into session.order_input on change
    order: u32,
    texture: Option<TextureHandle>,
    needs_upload: bool,
}

impl SierpinskiApp {
    fn new(session: Session) -> Self {
        let order = session
            .order_input
            .trim()
            .parse()
            .unwrap_or(session.config().default_order);
        let mut app = Self {
            session,
            canvas: Canvas::default(),
            order,
            texture: None,
            needs_upload: false,
        };
        // first frame shows a fractal straight away
        app.draw();
        app
    }

    fn draw(&mut self) {
        let result = self.session.draw(&mut self.canvas);
        self.after_draw(result);
    }

    fn reset(&mut self) {
        let result = self.session.reset(&mut self.canvas);
        self.after_draw(result);
        self.order = self.session.config().default_order;
    }

    fn after_draw(&mut self, result: sierpinski_core::Result<DrawReport>) {
        match result {
            Ok(_) => self.needs_upload = true,
            // bad input is routine, anything else is worth an error line
            Err(e) if e.is_validation() => log::info!("draw rejected: {}", e),
            Err(e) => log::error!("draw failed: {}", e),
        }
    }

    fn save_png(&mut self) {
        let export = match self.session.export(&self.canvas) {
            Ok(export) => export,
            Err(e) => {
                log::warn!("export skipped: {}", e);
                return;
            }
        };
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&export.filename)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };
        let status = match export.save(&path) {
            Ok(written) => Status::success(format!("Saved {}", written.display())),
            Err(e) => Status::error(format!("Save failed: {}", e)),
        };
        self.session.set_status(status);
    }

    fn upload(&mut self, ctx: &egui::Context) {
        let size = [self.canvas.width() as usize, self.canvas.height() as usize];
        let image = ColorImage::from_rgba_unmultiplied(size, self.canvas.image().as_raw());
        match &mut self.texture {
            Some(tex) => tex.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("sierpinski", image, egui::TextureOptions::NEAREST));
            }
        }
        self.needs_upload = false;
    }
}

impl App for SierpinskiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.needs_upload {
            self.upload(ctx);
        }

        let max_order = self.session.config().max_order;
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Sierpinski Triangle");
            ui.separator();

            ui.label("Order");
            let slider = ui.add(egui::Slider::new(&mut self.order, 0..=max_order).step_by(1.0));
            if slider.changed() {
                self.session.set_order_input(self.order.to_string());
            }

            ui.label("Size (px)");
            ui.text_edit_singleline(&mut self.session.size_input);

            ui.horizontal(|ui| {
                ui.label("Triangles:");
                ui.strong(self.session.triangles_label());
            });

            ui.separator();

            if ui.button("Draw").clicked() {
                self.draw();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
            if ui.button("Save PNG…").clicked() {
                self.save_png();
            }

            ui.separator();
            if let Some(status) = self.session.status() {
                let color = if status.is_error() {
                    Color32::from_rgb(220, 50, 47)
                } else {
                    Color32::from_rgb(60, 180, 75)
                };
                ui.colored_label(color, &status.message);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.texture {
            Some(tex) => {
                // keep square, never upscale past the rendered size
                let available = ui.available_size();
                let side = available.x.min(available.y).min(tex.size_vec2().x);
                ui.centered_and_justified(|ui| {
                    ui.image((tex.id(), Vec2::splat(side)));
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Draw” to start");
                });
            }
        });
    }
}

fn headless_export(session: &mut Session, path: PathBuf) -> anyhow::Result<()> {
    let mut canvas = Canvas::default();
    let report = session.draw(&mut canvas)?;
    let export = session.export(&canvas)?;
    let written = export
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("{} triangles -> {}", report.triangles, written.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    let mut session = Session::new(config);
    if let Some(order) = cli.order {
        session.set_order_input(order);
    }
    if let Some(size) = cli.size {
        session.size_input = size;
    }

    if let Some(path) = cli.export {
        return headless_export(&mut session, path);
    }

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Sierpinski Triangle",
        opts,
        Box::new(|_cc| Ok(Box::new(SierpinskiApp::new(session)))),
    )
    .map_err(|e| anyhow!("UI exited with error: {}", e))
}
