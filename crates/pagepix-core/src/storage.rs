//! Output folder and image file writes.
//!
//! Files are named by the discovery index on the page: `image_{index}.jpg`.
//! The extension is `.jpg` for every payload; WebP bodies are re-encoded to
//! match it, other formats are written verbatim under the same name.

use std::io;
use std::path::{Path, PathBuf};

/// Path of the output file for the image at discovery index `index`.
pub fn image_path(folder: &Path, index: usize) -> PathBuf {
    folder.join(format!("image_{index}.jpg"))
}

/// Creates the output folder (and parents) if absent.
pub fn ensure_dir(folder: &Path) -> io::Result<()> {
    std::fs::create_dir_all(folder)
}

/// Writes image bytes to `path`, truncating any existing file.
pub fn write_image(path: &Path, bytes: &[u8]) -> io::Result<()> {
    std::fs::write(path, bytes)
}
