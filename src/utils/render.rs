//! PNG output for pixel renderings.
//!
//! Every pixel frame in this crate comes from `Canvas`, so frames are RGBA with
//! exactly `width * height * 4` bytes. Encoding needs the `image` feature.

use std::path::Path;

use crate::core::{KeyboardError, RenderFrame, Result};

/// Encode an RGBA pixel frame as PNG.
pub fn encode_png(frame: &RenderFrame) -> Result<Vec<u8>> {
    let RenderFrame::Pixels { width, height, data } = frame else {
        return Err(KeyboardError::NotSupported("text renderings have no PNG form".into()));
    };
    let expected = (*width as usize)
        .checked_mul(*height as usize)
        .and_then(|n| n.checked_mul(4));
    if expected != Some(data.len()) {
        return Err(KeyboardError::Other(format!(
            "RGBA frame {width}x{height} carries {} bytes",
            data.len()
        )));
    }
    write_rgba(*width, *height, data)
}

#[cfg(feature = "image")]
fn write_rgba(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>> {
    use std::io::Cursor;

    let img = image::RgbaImage::from_raw(width, height, data.to_vec())
        .ok_or_else(|| KeyboardError::Other(format!("RGBA frame {width}x{height} is truncated")))?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| KeyboardError::Other(format!("PNG encode error: {e}")))?;
    Ok(out.into_inner())
}

#[cfg(not(feature = "image"))]
fn write_rgba(_width: u32, _height: u32, _data: &[u8]) -> Result<Vec<u8>> {
    Err(KeyboardError::NotSupported("PNG encoding requires the `image` feature".into()))
}

/// Encode `frame` and write it to `path`. Nothing is written if encoding fails.
pub fn save_png<P: AsRef<Path>>(path: P, frame: &RenderFrame) -> Result<()> {
    let bytes = encode_png(frame)?;
    let path = path.as_ref();
    std::fs::write(path, bytes)
        .map_err(|e| KeyboardError::Other(format!("Failed to write {}: {e}", path.display())))
}
