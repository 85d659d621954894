//! Tests for the per-channel whiteness predicate

#[cfg(test)]
mod tests {
    use whiteband::color::{Color, WhitenessClassifier};
    use whiteband::io::configuration::DEFAULT_WHITE_THRESHOLD;

    // Tests colors at or above the threshold are white for any alpha
    // Verified by requiring opaque alpha
    #[test]
    fn test_white_regardless_of_alpha() {
        let classifier = WhitenessClassifier::default();

        for alpha in [0, 1, 128, 255] {
            assert!(classifier.is_white(Color::rgba(235, 235, 235, alpha)));
            assert!(classifier.is_white(Color::rgba(255, 240, 236, alpha)));
        }
    }

    // Tests a single channel below the threshold breaks whiteness
    // Verified by checking only the red channel
    #[test]
    fn test_any_dim_channel_is_not_white() {
        let classifier = WhitenessClassifier::default();

        assert!(!classifier.is_white(Color::rgb(234, 255, 255)));
        assert!(!classifier.is_white(Color::rgb(255, 234, 255)));
        assert!(!classifier.is_white(Color::rgb(255, 255, 234)));
        assert!(!classifier.is_white(Color::BLACK));
    }

    // Tests the threshold is configurable with 235 as default
    // Verified by hardcoding the threshold in is_white
    #[test]
    fn test_custom_threshold() {
        assert_eq!(WhitenessClassifier::default().threshold(), 235);
        assert_eq!(DEFAULT_WHITE_THRESHOLD, 235);

        let lenient = WhitenessClassifier::new(200);
        assert!(lenient.is_white(Color::rgb(200, 210, 220)));
        assert!(!WhitenessClassifier::default().is_white(Color::rgb(200, 210, 220)));
    }

    // Tests absent colors are never treated as white
    // Verified by mapping None to true
    #[test]
    fn test_absent_color_is_not_white() {
        let classifier = WhitenessClassifier::new(0);

        assert!(!classifier.accepts(None));
        assert!(classifier.accepts(Some(Color::BLACK)));
    }
}
