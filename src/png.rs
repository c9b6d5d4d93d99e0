//! Reading and writing of PNG (Portable Network Graphics) files
//!
//! PNG is lossless; a canvas written and read back holds the same RGBA
//!   values, alpha included.
//!
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use tracing::{debug, info};

use crate::buffer::RenderingBuffer;
use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::Pixel;
use crate::PixelData;

fn io_error<P: AsRef<Path>>(path: P) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.as_ref().to_path_buf();
    move |source| Error::Io { path, source }
}

/// Encode a canvas as PNG bytes
pub fn encode(pix: &Canvas) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(pix.pixeldata(),
                                            pix.width() as u32,
                                            pix.height() as u32,
                                            ExtendedColorType::Rgba8)?;
    debug!("ENCODE {}x{} => {} bytes", pix.width(), pix.height(), bytes.len());
    Ok(bytes)
}

/// Decode PNG bytes into a canvas, converting to RGBA8 if needed
pub fn decode(bytes: &[u8]) -> Result<Canvas> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgba8();
    let (w, h) = img.dimensions();
    let rbuf = RenderingBuffer::from_raw(img.into_raw(), w as usize, h as usize, Canvas::bpp())
        .and_then(Canvas::from_buffer);
    rbuf.ok_or_else(|| Error::Encode(image::ImageError::Limits(
        image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError))))
}

/// Write a canvas to `filename` as PNG
///
/// The parent directory must already exist. The file is closed before
///   returning, on success and on failure
pub fn write_file<P: AsRef<Path>>(pix: &Canvas, filename: P) -> Result<()> {
    let filename : &Path = filename.as_ref();
    let bytes = encode(pix)?;
    let file = File::create(filename).map_err(io_error(filename))?;
    let mut w = BufWriter::new(file);
    w.write_all(&bytes).map_err(io_error(filename))?;
    w.flush().map_err(io_error(filename))?;
    info!("wrote {} ({} bytes)", filename.display(), bytes.len());
    Ok(())
}

/// Read a PNG file into a canvas
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Canvas> {
    let filename : &Path = filename.as_ref();
    let bytes = std::fs::read(filename).map_err(io_error(filename))?;
    decode(&bytes)
}

/// Compare two PNG files pixel by pixel
///
/// Differences are logged, one line per pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let d1 = read_file(f1)?;
    let d2 = read_file(f2)?;
    if d1.width() != d2.width() || d1.height() != d2.height() {
        debug!("image sizes differ: {}x{} {}x{}",
               d1.width(), d1.height(), d2.width(), d2.height());
        return Ok(false);
    }
    let w = d1.width();
    let bpp = Canvas::bpp();
    let mut flag = true;
    for (i,(v1,v2)) in d1.pixeldata().iter().zip(d2.pixeldata().iter()).enumerate() {
        if v1 != v2 {
            debug!("{} [{},{},{}]: {} {}", i, (i/bpp)%w, (i/bpp)/w, i%bpp, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
