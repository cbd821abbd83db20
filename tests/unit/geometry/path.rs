//! Tests for path command construction and SVG path data formatting

#[cfg(test)]
mod tests {
    use kolamgen::geometry::{PathCommand, PathSegment, Point};

    // Verified by changing the command letters in the Display impl
    #[test]
    fn test_line_path_data() {
        let segment = PathSegment::starting_at(Point::new(1.0, 2.0)).line_to(Point::new(3.5, 4.0));
        assert_eq!(segment.to_path_data(), "M 1 2 L 3.5 4");
    }

    #[test]
    fn test_curve_path_data() {
        let quad = PathSegment::starting_at(Point::new(0.0, 0.0))
            .quad_to(Point::new(1.0, 1.0), Point::new(2.0, 0.0));
        assert_eq!(quad.to_path_data(), "M 0 0 Q 1 1 2 0");

        let cubic = PathSegment::starting_at(Point::new(0.0, 0.0))
            .cubic_to(Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0))
            .close();
        assert_eq!(cubic.to_path_data(), "M 0 0 C 1 1 1 1 2 2 Z");
    }

    #[test]
    fn test_arc_path_data() {
        let segment = PathSegment::starting_at(Point::new(10.0, 0.0)).arc_to(5.0, Point::new(0.0, 0.0));
        assert_eq!(segment.to_path_data(), "M 10 0 A 5 5 0 1 1 0 0");
    }

    // Coordinates are rounded to three decimals, trailing zeros and negative zero dropped
    // Verified by removing the negative zero special case
    #[test]
    fn test_coordinate_precision() {
        let segment = PathSegment::starting_at(Point::new(1.234_56, -0.000_1));
        assert_eq!(segment.to_path_data(), "M 1.235 0");

        let segment = PathSegment::starting_at(Point::new(-2.5, 100.0));
        assert_eq!(segment.to_path_data(), "M -2.5 100");
    }

    #[test]
    fn test_multiple_subpaths() {
        let segment = PathSegment::starting_at(Point::new(0.0, 5.0))
            .line_to(Point::new(10.0, 5.0))
            .move_to(Point::new(5.0, 0.0))
            .line_to(Point::new(5.0, 10.0));

        assert_eq!(segment.to_path_data(), "M 0 5 L 10 5 M 5 0 L 5 10");
        assert_eq!(segment.commands().len(), 4);
        assert!(!segment.is_closed());
    }

    #[test]
    fn test_points_include_controls() {
        let segment = PathSegment::starting_at(Point::new(0.0, 0.0))
            .quad_to(Point::new(1.0, 1.0), Point::new(2.0, 0.0))
            .close();

        assert_eq!(
            segment.points(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0)
            ]
        );
        assert!(segment.is_closed());
    }

    #[test]
    fn test_command_curve_classification() {
        let end = Point::new(1.0, 1.0);

        assert!(!PathCommand::MoveTo(end).is_curve());
        assert!(!PathCommand::LineTo(end).is_curve());
        assert!(!PathCommand::Close.is_curve());
        assert!(PathCommand::QuadTo { control: end, end }.is_curve());
        assert!(
            PathCommand::ArcTo {
                radius: 1.0,
                large_arc: true,
                sweep: true,
                end
            }
            .is_curve()
        );
    }
}
