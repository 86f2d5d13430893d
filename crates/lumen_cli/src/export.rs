//! Writing finished framebuffers to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use lumen_tracer::{Framebuffer, PixelSink};

/// Scanlines between progress messages while writing PPM.
const PROGRESS_INTERVAL: usize = 100;

/// Save the framebuffer, choosing the format from the file extension.
///
/// `.ppm` is written as plain-text P3; anything else goes through the
/// `image` crate's encoders (PNG, BMP, ...).
pub fn save(image: &Framebuffer, path: &Path) -> Result<()> {
    let is_ppm = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_ppm(image, &mut writer)?;
        writer.flush()?;
    } else {
        image::save_buffer(
            path,
            image.as_bytes(),
            image.width(),
            image.height(),
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    }

    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Write the framebuffer as an ASCII PPM (P3), one scanline per line.
pub fn write_ppm<W: Write>(image: &Framebuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    let height = image.height() as usize;
    for (j, row) in image.rows().enumerate() {
        if j % PROGRESS_INTERVAL == 0 {
            log::debug!("Scanlines remaining: {}", height - j);
        }
        let line = row
            .iter()
            .map(|c| format!("{} {} {}", c.r, c.g, c.b))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }

    Ok(())
}
