//! Tests for policy defaults and configuration validation

#[cfg(test)]
mod tests {
    use whiteband::FilterError;
    use whiteband::io::configuration::{
        DEFAULT_LEFT_BAND_FRACTION, DEFAULT_RIGHT_BAND_START, DEFAULT_TOP_STRIP_FRACTION,
        DEFAULT_VERTICAL_BAND_FRACTION, DEFAULT_WHITE_THRESHOLD, PolicyConfig,
        SUPPORTED_EXTENSIONS,
    };

    // Tests defaults match the tuned policy values
    // Verified by changing constant values
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_WHITE_THRESHOLD, 235);
        assert!((DEFAULT_TOP_STRIP_FRACTION - 0.005).abs() < f64::EPSILON);
        assert!((DEFAULT_LEFT_BAND_FRACTION - 0.15).abs() < f64::EPSILON);
        assert!((DEFAULT_RIGHT_BAND_START - 0.85).abs() < f64::EPSILON);
        assert!((DEFAULT_VERTICAL_BAND_FRACTION - 0.5).abs() < f64::EPSILON);
    }

    // Tests default config is assembled from the constants and is valid
    // Verified by swapping fields in Default
    #[test]
    fn test_default_config() {
        let config = PolicyConfig::default();

        assert_eq!(config.white_threshold, DEFAULT_WHITE_THRESHOLD);
        assert!((config.left_band_fraction - DEFAULT_LEFT_BAND_FRACTION).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    // Tests supported extensions are lowercase image formats
    // Verified by adding an uppercase entry
    #[test]
    fn test_supported_extensions() {
        assert_eq!(SUPPORTED_EXTENSIONS, ["jpg", "jpeg", "png"]);
        for extension in SUPPORTED_EXTENSIONS {
            assert_eq!(extension, extension.to_ascii_lowercase());
        }
    }

    // Tests fractions outside [0, 1] or non-finite are refused
    // Verified by removing the range check
    #[test]
    fn test_fraction_range_validation() {
        let cases = [
            PolicyConfig {
                top_strip_fraction: -0.1,
                ..PolicyConfig::default()
            },
            PolicyConfig {
                vertical_band_fraction: 1.01,
                ..PolicyConfig::default()
            },
            PolicyConfig {
                left_band_fraction: f64::NAN,
                ..PolicyConfig::default()
            },
            PolicyConfig {
                right_band_start: f64::INFINITY,
                ..PolicyConfig::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(
                    config.validate(),
                    Err(FilterError::InvalidParameter { .. })
                ),
                "{config:?} should be invalid"
            );
        }
    }

    // Tests the left band may not extend past the right band start
    // Verified by removing the ordering check
    #[test]
    fn test_band_order_validation() {
        let overlapping = PolicyConfig {
            left_band_fraction: 0.9,
            right_band_start: 0.1,
            ..PolicyConfig::default()
        };
        let error = overlapping.validate().unwrap_err();
        assert!(error.to_string().contains("left_band_fraction"));

        let touching = PolicyConfig {
            left_band_fraction: 0.5,
            right_band_start: 0.5,
            ..PolicyConfig::default()
        };
        assert!(touching.validate().is_ok());
    }

    // Tests boundary fractions are accepted
    // Verified by using an exclusive range
    #[test]
    fn test_boundary_fractions_valid() {
        let config = PolicyConfig {
            top_strip_fraction: 0.0,
            left_band_fraction: 0.0,
            right_band_start: 1.0,
            vertical_band_fraction: 1.0,
            white_threshold: 255,
        };
        assert!(config.validate().is_ok());
    }
}
