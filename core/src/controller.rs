use std::time::{Duration, Instant};

use crate::Surface;
use crate::config::{RenderConfig, SIZE_LIMIT};
use crate::error::{FractalError, Result};
use crate::export::{PngExport, export_png};
use crate::geometry::{subdivide, triangle_count};
use crate::raster::Canvas;
use crate::render::render;

// Validated draw parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractalParams {
    pub order: u32,
    pub size: u32,
}

impl FractalParams {
    // Parse the raw control values. Nothing is drawn if this fails.
    pub fn parse(order_input: &str, size_input: &str, config: &RenderConfig) -> Result<Self> {
        let order_text = order_input.trim();
        let order: i64 = order_text
            .parse()
            .map_err(|_| FractalError::InvalidOrder(order_text.to_string()))?;
        let size_text = size_input.trim();
        let size: i64 = size_text
            .parse()
            .map_err(|_| FractalError::InvalidSize(size_text.to_string()))?;

        if order < 0 || order > i64::from(config.max_order) {
            return Err(FractalError::OrderOutOfRange {
                order,
                max: config.max_order,
            });
        }
        // an unvalidated config must not let the raster allocation overflow
        let max_size = config.max_size.min(SIZE_LIMIT);
        if size < 1 || size > i64::from(max_size) {
            return Err(FractalError::SizeOutOfRange {
                size,
                max: max_size,
            });
        }

        Ok(Self {
            order: order as u32,
            size: size as u32,
        })
    }

    pub fn filename(&self) -> String {
        format!("sierpinski_order{}_size{}.png", self.order, self.size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawReport {
    pub params: FractalParams,
    pub triangles: usize,
    pub elapsed: Duration,
}

// Validate, then resize + clear + subdivide + render.
// On error the surface has not been touched.
pub fn draw_fractal<S: Surface + ?Sized>(
    surface: &mut S,
    order_input: &str,
    size_input: &str,
    config: &RenderConfig,
) -> Result<DrawReport> {
    let params = match FractalParams::parse(order_input, size_input, config) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("rejected draw request: {}", e);
            return Err(e);
        }
    };
    let start = Instant::now();

    let size = params.size;
    surface.resize(size, size);
    surface.fill_rect(0, 0, size, size, config.background.to_rgba());

    let space = config.coordinate_space;
    let t = space.initial_triangle(size);
    let leaves = subdivide(params.order, t.p1, t.p2, t.p3);
    let triangles = render(
        surface,
        &leaves,
        config.fill.to_rgba(),
        &space.view_transform(size),
    );

    let elapsed = start.elapsed();
    log::debug!(
        "order {} size {}: {} triangles in {:.2} ms",
        params.order,
        params.size,
        triangles,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(DrawReport {
        params,
        triangles,
        elapsed,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

// Control values and status shown next to the surface. The surface itself
// is passed into every call rather than owned here.
#[derive(Clone, Debug)]
pub struct Session {
    pub order_input: String,
    pub size_input: String,
    config: RenderConfig,
    status: Option<Status>,
    triangles_label: String,
    rendered: Option<FractalParams>,
}

impl Session {
    pub fn new(config: RenderConfig) -> Self {
        let mut session = Self {
            order_input: config.default_order.to_string(),
            size_input: config.default_size.to_string(),
            config,
            status: None,
            triangles_label: String::new(),
            rendered: None,
        };
        session.refresh_estimate();
        session
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn hide_status(&mut self) {
        self.status = None;
    }

    pub fn triangles_label(&self) -> &str {
        &self.triangles_label
    }

    // Parameters of the image currently on the surface
    pub fn rendered(&self) -> Option<FractalParams> {
        self.rendered
    }

    // Slider moved: show 3^order until the next draw reports the real count
    pub fn set_order_input(&mut self, order: impl Into<String>) {
        self.order_input = order.into();
        self.refresh_estimate();
    }

    fn refresh_estimate(&mut self) {
        let estimate = self
            .order_input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(triangle_count);
        self.triangles_label = match estimate {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        };
    }

    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<DrawReport> {
        match draw_fractal(surface, &self.order_input, &self.size_input, &self.config) {
            Ok(report) => {
                self.rendered = Some(report.params);
                self.triangles_label = report.triangles.to_string();
                self.status = Some(Status::success(format!(
                    "Fractal drawn ({} triangles) in {:.2} ms",
                    report.triangles,
                    report.elapsed.as_secs_f64() * 1000.0
                )));
                Ok(report)
            }
            Err(e) => {
                self.status = Some(Status::error(e.to_string()));
                Err(e)
            }
        }
    }

    // Restore the default order/size, redraw and hide the status line
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<DrawReport> {
        self.order_input = self.config.default_order.to_string();
        self.size_input = self.config.default_size.to_string();
        let report = self.draw(surface);
        self.hide_status();
        report
    }

    // Encode what is on the canvas, named after the parameters it was drawn with
    pub fn export(&mut self, canvas: &Canvas) -> Result<PngExport> {
        let result = match self.rendered {
            Some(params) => export_png(canvas, &params),
            None => Err(FractalError::NothingRendered),
        };
        if let Err(e) = &result {
            self.status = Some(Status::error(format!("Export failed: {}", e)));
        }
        result
    }
}
