//! Tests for the top strip contamination scan

#[cfg(test)]
mod tests {
    use whiteband::color::{Color, ColorGrid, WhitenessClassifier};
    use whiteband::policy::{Contaminant, TopStripDetector};

    // Tests strip height rounds up and stays within the image
    // Verified by using floor instead of ceil
    #[test]
    fn test_strip_rows_rounds_up() {
        let detector = TopStripDetector::default();

        assert_eq!(detector.strip_rows(100), 1);
        assert_eq!(detector.strip_rows(200), 1);
        assert_eq!(detector.strip_rows(201), 2);
        assert_eq!(detector.strip_rows(1), 1);
        assert_eq!(detector.strip_rows(0), 0);

        let whole = TopStripDetector::new(1.0, WhitenessClassifier::default());
        assert_eq!(whole.strip_rows(37), 37);
        let none = TopStripDetector::new(0.0, WhitenessClassifier::default());
        assert_eq!(none.strip_rows(37), 0);
    }

    // Tests an all-white strip is clean
    // Verified by inverting the whiteness check
    #[test]
    fn test_white_strip_is_clean() {
        let mut grid = ColorGrid::filled(100, 100, Color::WHITE);
        // Below the single scanned row
        grid.set(10, 1, Color::BLACK);

        assert!(!TopStripDetector::default().has_contamination(&grid));
    }

    // Tests one non-white pixel anywhere in the strip is detected
    // Verified by scanning only the first half of the width
    #[test]
    fn test_single_pixel_contaminates() {
        let detector = TopStripDetector::default();

        for x in [0, 50, 99] {
            let mut grid = ColorGrid::filled(100, 100, Color::WHITE);
            grid.set(x, 0, Color::rgb(250, 250, 200));
            assert!(detector.has_contamination(&grid), "pixel at x={x}");
        }
    }

    // Tests every scanned row is checked for taller images
    // Verified by scanning only row zero
    #[test]
    fn test_contamination_in_lower_strip_row() {
        let mut grid = ColorGrid::filled(10, 1000, Color::WHITE);
        grid.set(9, 4, Color::BLACK);

        let detector = TopStripDetector::default();
        assert_eq!(detector.strip_rows(1000), 5);
        assert_eq!(
            detector.first_contaminant(&grid),
            Some(Contaminant {
                x: 9,
                y: 4,
                color: Color::BLACK,
            })
        );
    }

    // Tests the first offending pixel is reported in row-major order
    // Verified by scanning columns before rows
    #[test]
    fn test_first_contaminant_order() {
        let mut grid = ColorGrid::filled(10, 400, Color::WHITE);
        grid.set(0, 1, Color::BLACK);
        grid.set(5, 0, Color::rgb(1, 2, 3));

        let found = TopStripDetector::default().first_contaminant(&grid);
        assert_eq!(found.map(|c| (c.x, c.y)), Some((5, 0)));
    }

    // Tests images too short for a strip and empty strips are clean
    // Verified by treating empty strips as contaminated
    #[test]
    fn test_empty_strip_is_clean() {
        let grid = ColorGrid::filled(10, 10, Color::BLACK);
        let none = TopStripDetector::new(0.0, WhitenessClassifier::default());
        assert!(!none.has_contamination(&grid));

        let empty = ColorGrid::filled(10, 0, Color::BLACK);
        assert!(!TopStripDetector::default().has_contamination(&empty));
    }

    // Tests the detector uses its classifier threshold
    // Verified by ignoring the classifier in the scan
    #[test]
    fn test_detector_threshold() {
        let grid = ColorGrid::filled(20, 20, Color::rgb(210, 210, 210));

        assert!(TopStripDetector::default().has_contamination(&grid));
        let lenient = TopStripDetector::new(0.005, WhitenessClassifier::new(200));
        assert!(!lenient.has_contamination(&grid));
    }
}
