//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use kolamgen::io::progress::BatchProgress;

    // Hidden bars still count completed renders
    // Verified by skipping the increment when hidden
    #[test]
    fn test_hidden_progress_counts() {
        let progress = BatchProgress::new(3, false);
        progress.start("first");
        progress.complete();
        progress.start("second");
        progress.complete();

        assert_eq!(progress.position(), 2);
        let _elapsed = progress.finish();
    }

    #[test]
    fn test_visible_progress_finishes() {
        let progress = BatchProgress::new(1, true);
        progress.start("only");
        progress.complete();
        assert_eq!(progress.position(), 1);
        let _elapsed = progress.finish();
    }
}
