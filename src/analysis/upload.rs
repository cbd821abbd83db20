//! Upload validation: size limit first, then a full decode

use crate::io::configuration::MAX_UPLOAD_BYTES;
use crate::io::error::{KolamError, Result, file_system};
use image::{ImageFormat, ImageReader};
use std::path::{Path, PathBuf};

/// An uploaded image that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Where the upload was read from
    pub path: PathBuf,
    /// Detected container format
    pub format: Option<ImageFormat>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// File size in bytes
    pub size_bytes: u64,
}

impl UploadedImage {
    /// Validate and decode the image at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is larger than 5 MiB
    /// - The contents do not decode as a supported image format
    pub fn load(path: &Path) -> Result<Self> {
        let size_bytes = std::fs::metadata(path)
            .map_err(|e| file_system(path, "read upload metadata", e))?
            .len();

        if size_bytes > MAX_UPLOAD_BYTES {
            return Err(KolamError::UploadTooLarge {
                path: path.to_path_buf(),
                size: size_bytes,
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let reader = ImageReader::open(path)
            .map_err(|e| file_system(path, "open upload", e))?
            .with_guessed_format()
            .map_err(|e| file_system(path, "detect upload format", e))?;
        let format = reader.format();

        let decoded = reader.decode().map_err(|source| KolamError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "decoded upload"
        );

        Ok(Self {
            path: path.to_path_buf(),
            format,
            width: decoded.width(),
            height: decoded.height(),
            size_bytes,
        })
    }

    /// File extension of the detected format, e.g. `"png"`
    pub fn format_name(&self) -> &'static str {
        self.format
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("unknown")
    }
}
