//! Tests for the built-in sample configurations

#[cfg(test)]
mod tests {
    use kolamgen::pattern::PatternType;
    use kolamgen::pattern::presets::{PRESETS, Preset};

    #[test]
    fn test_preset_table() {
        let summary: Vec<_> = PRESETS
            .iter()
            .map(|preset| (preset.name, preset.grid_size, preset.pattern, preset.complexity))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Sacred Lotus Mandala", 7, PatternType::Traditional, 4),
                ("Cosmic Geometry", 9, PatternType::Geometric, 5),
                ("Garden of Petals", 6, PatternType::Floral, 3),
                ("Celebration Burst", 8, PatternType::Festival, 4),
                ("Contemporary Flow", 5, PatternType::Modern, 3),
            ]
        );
    }

    #[test]
    fn test_find_ignores_case() {
        let preset = Preset::find("cosmic geometry").unwrap();
        assert_eq!(preset.pattern, PatternType::Geometric);
        assert!(Preset::find("Unknown Preset").is_none());
    }

    #[test]
    fn test_request_carries_preset_values() {
        let request = Preset::find("Garden of Petals").unwrap().request(11);

        assert_eq!(request.grid_size(), 6);
        assert_eq!(request.pattern(), Some(PatternType::Floral));
        assert_eq!(request.complexity(), 3);
        assert_eq!(request.seed(), 11);
    }
}
