use crate::error::SlateError;
use crate::interpolation::InterpolationScheme;

//=====================================================================
// Flat numeric data array handed over by the format reader, with
// typed random access. The reader has already resolved record
// locations; this type only interprets offsets and lengths. Counts
// and enumeration codes are stored as doubles holding integral
// values, per the format convention.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct XssArray(Vec<f64>);

impl XssArray {
    pub fn new(data: Vec<f64>) -> Self {
        Self(data)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Bounds-checked scalar read.
    pub fn get(&self, index: usize) -> Result<f64, SlateError> {
        self.0
            .get(index)
            .copied()
            .ok_or(SlateError::XssOutOfBounds {
                index,
                len: 1,
                array_len: self.0.len(),
            })
    }

    // Read a count or locator stored as a double.
    pub fn get_usize(&self, index: usize) -> Result<usize, SlateError> {
        Ok(self.get(index)? as usize)
    }

    // Read an enumerated interpolation code.
    pub fn get_scheme(&self, index: usize) -> Result<InterpolationScheme, SlateError> {
        let code = self.get(index)? as u32;
        InterpolationScheme::try_from(code)
            .map_err(|_| SlateError::InvalidInterpolationScheme(code))
    }

    // Bounds-checked contiguous read of `len` doubles starting at `index`.
    pub fn range(&self, index: usize, len: usize) -> Result<&[f64], SlateError> {
        self.0
            .get(index..index + len)
            .ok_or(SlateError::XssOutOfBounds {
                index,
                len,
                array_len: self.0.len(),
            })
    }
}

impl From<Vec<f64>> for XssArray {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_reads() {
        let xss = XssArray::new(vec![3.0, 1.5, 2.5]);
        assert_eq!(xss.len(), 3);
        assert_eq!(xss.get(1).unwrap(), 1.5);
        assert_eq!(xss.get_usize(0).unwrap(), 3);
        assert!(matches!(
            xss.get(3),
            Err(SlateError::XssOutOfBounds { index: 3, .. })
        ));
    }

    #[test]
    fn test_range_reads() {
        let xss = XssArray::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(xss.range(1, 2).unwrap(), &[2.0, 3.0]);
        assert_eq!(xss.range(0, 4).unwrap(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(xss.range(2, 3).is_err());
    }

    #[test]
    fn test_zero_length_range_is_valid() {
        let xss = XssArray::new(vec![]);
        assert!(xss.is_empty());
        assert_eq!(xss.range(0, 0).unwrap(), &[] as &[f64]);
    }

    #[test]
    fn test_scheme_reads() {
        let xss = XssArray::new(vec![2.0, 7.0]);
        assert_eq!(xss.get_scheme(0).unwrap(), InterpolationScheme::LinLin);
        assert_eq!(
            xss.get_scheme(1),
            Err(SlateError::InvalidInterpolationScheme(7))
        );
    }
}
