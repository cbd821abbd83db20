//! Writing generated patterns to disk as timestamped SVG files

use crate::io::configuration::{EXPORT_EXTENSION, EXPORT_PREFIX, MAX_EXPORT_ATTEMPTS};
use crate::io::error::{Result, file_system};
use crate::io::svg::to_svg_string;
use crate::pattern::GeneratedPattern;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, zero if the clock is before it
pub fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis())
}

/// Filename for an export taken at `timestamp`, with an optional collision suffix
pub fn export_file_name(timestamp: u128, attempt: u32) -> String {
    if attempt == 0 {
        format!("{EXPORT_PREFIX}-{timestamp}.{EXPORT_EXTENSION}")
    } else {
        format!("{EXPORT_PREFIX}-{timestamp}-{attempt}.{EXPORT_EXTENSION}")
    }
}

/// Write `pattern` into `directory` as `kolam-pattern-<timestamp>.svg`
///
/// The directory is created if needed. Existing files are never
/// overwritten: a numeric suffix is appended until a free name is found.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - No free filename is found within the attempt limit
/// - The file cannot be written
pub fn export_pattern(
    pattern: &GeneratedPattern,
    directory: &Path,
    timestamp: u128,
) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .map_err(|e| file_system(directory, "create directory", e))?;

    let document = to_svg_string(pattern);

    for attempt in 0..MAX_EXPORT_ATTEMPTS {
        let path = directory.join(export_file_name(timestamp, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(document.as_bytes())
                    .map_err(|e| file_system(&path, "write pattern", e))?;
                tracing::info!(path = %path.display(), bytes = document.len(), "exported pattern");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!(path = %path.display(), "export name taken");
            }
            Err(e) => return Err(file_system(&path, "create file", e)),
        }
    }

    Err(file_system(
        directory.join(export_file_name(timestamp, 0)),
        "choose export name",
        std::io::Error::new(ErrorKind::AlreadyExists, "no free export filename"),
    ))
}
