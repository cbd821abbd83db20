//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use kolamgen::io::logging::{default_directive, init};

    // Verified by swapping the quiet and normal directives
    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "kolamgen=warn");
        assert_eq!(default_directive(false), "kolamgen=info");
    }

    #[test]
    fn test_init_is_repeatable() {
        init(true);
        init(false);
        tracing::info!("subscriber installed");
    }
}
