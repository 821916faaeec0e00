use std::path::Path;

use image::RgbaImage;

/// Writes a rendered icon to disk using the `image` crate.
///
/// The encoder is picked from the file extension, so `.png` and `.ico` both
/// work.
pub struct IconFileWriter;

impl IconFileWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, path: &Path, icon: &RgbaImage) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        icon.save(path)?;
        log::debug!("Wrote {}x{} icon to {}", icon.width(), icon.height(), path.display());
        Ok(())
    }
}

impl Default for IconFileWriter {
    fn default() -> Self {
        Self::new()
    }
}
