//! Tests for request construction, clamping and validation

#[cfg(test)]
mod tests {
    use kolamgen::KolamError;
    use kolamgen::pattern::{GenerationRequest, PatternType};

    // Verified by removing the clamp on complexity
    #[test]
    fn test_new_clamps_into_range() {
        let low = GenerationRequest::new(1, Some(PatternType::Floral), 0, 7);
        assert_eq!(low.grid_size(), 3);
        assert_eq!(low.complexity(), 1);

        let high = GenerationRequest::new(20, Some(PatternType::Floral), 9, 7);
        assert_eq!(high.grid_size(), 12);
        assert_eq!(high.complexity(), 5);
        assert_eq!(high.seed(), 7);
    }

    #[test]
    fn test_validated_rejects_out_of_range() {
        for grid_size in [2, 13] {
            let error = GenerationRequest::validated(grid_size, None, 3, 0).unwrap_err();
            assert!(error.to_string().contains("grid_size"), "{error}");
        }
        for complexity in [0, 6] {
            let error = GenerationRequest::validated(5, None, complexity, 0).unwrap_err();
            assert!(error.to_string().contains("complexity"), "{error}");
        }
    }

    #[test]
    fn test_validated_accepts_bounds() {
        assert!(GenerationRequest::validated(3, None, 1, 0).is_ok());
        assert!(GenerationRequest::validated(12, Some(PatternType::Modern), 5, 0).is_ok());
    }

    // Empty tags are refused; unknown non-empty tags yield a request without a style
    // Verified by routing unknown tags through strict parsing
    #[test]
    fn test_from_tag() {
        assert!(matches!(
            GenerationRequest::from_tag(5, "", 3, 0),
            Err(KolamError::MissingPatternType)
        ));
        assert!(matches!(
            GenerationRequest::from_tag(5, "   ", 3, 0),
            Err(KolamError::MissingPatternType)
        ));

        let unknown = GenerationRequest::from_tag(5, "spiral", 3, 0).unwrap();
        assert_eq!(unknown.pattern(), None);

        let known = GenerationRequest::from_tag(5, "Geometric", 3, 0).unwrap();
        assert_eq!(known.pattern(), Some(PatternType::Geometric));
    }

    #[test]
    fn test_style_fallback() {
        let request = GenerationRequest::new(5, None, 3, 0);
        assert_eq!(request.style_or_fallback(), PatternType::Traditional);

        let request = GenerationRequest::new(5, Some(PatternType::Festival), 3, 0);
        assert_eq!(request.style_or_fallback(), PatternType::Festival);
    }
}
