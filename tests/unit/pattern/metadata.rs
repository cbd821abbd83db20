//! Tests for metadata derived from generation requests

#[cfg(test)]
mod tests {
    use kolamgen::pattern::metadata::estimated_minutes;
    use kolamgen::pattern::{Difficulty, GenerationRequest, PatternMetadata, PatternType};

    // Verified by shifting the Beginner boundary to complexity 3
    #[test]
    fn test_difficulty_boundaries() {
        assert_eq!(Difficulty::for_complexity(1), Difficulty::Beginner);
        assert_eq!(Difficulty::for_complexity(2), Difficulty::Beginner);
        assert_eq!(Difficulty::for_complexity(3), Difficulty::Intermediate);
        assert_eq!(Difficulty::for_complexity(4), Difficulty::Intermediate);
        assert_eq!(Difficulty::for_complexity(5), Difficulty::Advanced);
        assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
    }

    // 25 dots at level 3 is exactly 22.5 minutes, which rounds up
    // Verified by replacing round with floor
    #[test]
    fn test_estimated_minutes_rounding() {
        assert_eq!(estimated_minutes(25, 3), 23);
        assert_eq!(estimated_minutes(9, 1), 3);
        assert_eq!(estimated_minutes(144, 5), 216);
    }

    #[test]
    fn test_geometric_metadata() {
        let request = GenerationRequest::new(7, Some(PatternType::Geometric), 4, 0);
        let metadata = PatternMetadata::derive(&request);

        assert_eq!(metadata.grid_size_label, "7 × 7");
        assert_eq!(metadata.total_dots, 49);
        assert_eq!(metadata.pattern_type_label, Some("Geometric"));
        assert_eq!(metadata.complexity_level, 4);
        assert_eq!(metadata.estimated_minutes, 59);
        assert_eq!(metadata.difficulty, Difficulty::Intermediate);
        assert_eq!(metadata.traditional_name, "Star Formation");
        assert_eq!(
            metadata.color_palette,
            ["Royal Purple", "Golden Yellow", "Ocean Blue", "Pure White"]
        );
    }

    // Verified by returning an empty palette for unrecognized styles
    #[test]
    fn test_unrecognized_style_falls_back_to_traditional() {
        let request = GenerationRequest::new(5, None, 3, 0);
        let metadata = PatternMetadata::derive(&request);

        assert_eq!(metadata.pattern_type_label, None);
        assert_eq!(metadata.traditional_name, "Margazhi Kolam");
        assert_eq!(metadata.color_palette, PatternType::Traditional.palette());
    }

    // Out-of-range levels are clamped before the name lookup
    #[test]
    fn test_out_of_range_complexity_is_clamped() {
        let low = GenerationRequest::new(5, Some(PatternType::Floral), 0, 0);
        assert_eq!(PatternMetadata::derive(&low).traditional_name, "Lotus Mandala");

        let high = GenerationRequest::new(5, Some(PatternType::Floral), 42, 0);
        assert_eq!(PatternMetadata::derive(&high).traditional_name, "Hibiscus Bloom");
    }

    // Oversized lattices are clamped, so the dot count stays at 12 × 12
    // Verified by dropping the clamp on grid size
    #[test]
    fn test_oversized_grid_is_bounded() {
        let request = GenerationRequest::new(70_000, Some(PatternType::Modern), 3, 0);
        let metadata = PatternMetadata::derive(&request);

        assert_eq!(metadata.grid_size_label, "12 × 12");
        assert_eq!(metadata.total_dots, 144);
        assert_eq!(metadata.estimated_minutes, 130);
    }

    // Metadata ignores the seed
    #[test]
    fn test_seed_independent() {
        let a = GenerationRequest::new(6, Some(PatternType::Modern), 2, 1);
        let b = GenerationRequest::new(6, Some(PatternType::Modern), 2, 99);
        assert_eq!(PatternMetadata::derive(&a), PatternMetadata::derive(&b));
    }
}
