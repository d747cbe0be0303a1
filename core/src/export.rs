use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::controller::FractalParams;
use crate::error::Result;
use crate::raster::Canvas;

// Encoded PNG plus the download name derived from the draw parameters
#[derive(Clone, Debug)]
pub struct PngExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PngExport {
    // Write to `path`; an existing directory receives `self.filename`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let target = if path.is_dir() {
            path.join(&self.filename)
        } else {
            path.to_path_buf()
        };
        std::fs::write(&target, &self.bytes)?;
        log::info!("wrote {} ({} bytes)", target.display(), self.bytes.len());
        Ok(target)
    }
}

pub fn export_png(canvas: &Canvas, params: &FractalParams) -> Result<PngExport> {
    let mut bytes = Vec::new();
    canvas
        .image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(PngExport {
        filename: params.filename(),
        bytes,
    })
}
