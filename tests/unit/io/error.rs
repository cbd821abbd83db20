//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use kolamgen::KolamError;
    use kolamgen::io::error::{file_system, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system("/tmp/out", "create directory", io_error);

        assert!(error.source().is_some());
        assert!(KolamError::MissingPatternType.source().is_none());
    }

    #[test]
    fn test_missing_pattern_message() {
        let message = KolamError::MissingPatternType.to_string();
        assert!(message.contains("Pattern type required"));
    }

    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("grid_size", &20, &"must be between 3 and 12");

        let message = error.to_string();
        assert!(message.contains("grid_size"));
        assert!(message.contains("20"));
        assert!(message.contains("must be between 3 and 12"));
    }

    #[test]
    fn test_upload_too_large_error() {
        let error = KolamError::UploadTooLarge {
            path: PathBuf::from("photo.jpg"),
            size: 6_000_000,
            limit: 5_242_880,
        };

        let message = error.to_string();
        assert!(message.contains("photo.jpg"));
        assert!(message.contains("6000000"));
        assert!(message.contains("5242880"));
    }

    #[test]
    fn test_file_system_error_mentions_operation() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = file_system(PathBuf::from("/restricted"), "write pattern", io_error);

        let message = error.to_string();
        assert!(message.contains("write pattern"));
        assert!(message.contains("/restricted"));
        assert!(message.contains("access denied"));
    }
}
