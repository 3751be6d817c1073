use num_enum::TryFromPrimitive;
use strum_macros::{Display, EnumIter};

// Enum for possible interpolation schemes from the ENDF standard.
// The discriminants are the raw codes stored in the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, Display, EnumIter)]
#[repr(u32)]
pub enum InterpolationScheme {
    Histogram = 1,
    LinLin = 2,
    LinLog = 3,
    LogLin = 4,
    LogLog = 5,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_raw_codes_round_trip() {
        for scheme in InterpolationScheme::iter() {
            assert_eq!(InterpolationScheme::try_from(scheme as u32), Ok(scheme));
        }
    }

    #[test]
    fn test_from_raw_code() {
        assert_eq!(
            InterpolationScheme::try_from(1).unwrap(),
            InterpolationScheme::Histogram
        );
        assert_eq!(
            InterpolationScheme::try_from(5).unwrap(),
            InterpolationScheme::LogLog
        );
        assert!(InterpolationScheme::try_from(0).is_err());
        assert!(InterpolationScheme::try_from(6).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(InterpolationScheme::LinLin.to_string(), "LinLin");
        assert_eq!(InterpolationScheme::Histogram.to_string(), "Histogram");
    }
}
