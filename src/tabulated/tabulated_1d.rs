use crate::error::SlateError;
use crate::interpolation::InterpolationScheme;
use crate::tabulated::{MultiRegion1D, Region1D};
use crate::xss::XssArray;

//=====================================================================
// Tabulated1D: a scalar function of one variable represented by a
// discretized, interpolated table. Implementations hold no mutable
// state after construction, so concurrent evaluation is safe. Values
// outside the tabulated domain clamp to the nearest grid point.
//=====================================================================
pub trait Tabulated1D {
    fn evaluate(&self, x: f64) -> f64;
}

//=====================================================================
// Tabulation: the sealed set of Tabulated1D implementations. Callers
// hold this enum (or a &dyn Tabulated1D) and never inspect the
// concrete interpolant.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub enum Tabulation {
    Region(Region1D),
    MultiRegion(MultiRegion1D),
}

impl Tabulated1D for Tabulation {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Tabulation::Region(region) => region.evaluate(x),
            Tabulation::MultiRegion(regions) => regions.evaluate(x),
        }
    }
}

impl Tabulation {
    // Build an interpolant from an NR/NBT/INT table record in the xss
    // array. The layout starting at `idx` is: NR, then NR breakpoint
    // values and NR interpolation codes when NR > 0, then NE, then NE
    // x-values followed by NE y-values. NR = 0 means a single lin-lin
    // region spanning the whole grid.
    pub fn from_xss(xss: &XssArray, idx: usize) -> Result<Self, SlateError> {
        let nr = xss.get_usize(idx)?;
        let ne = xss.get_usize(idx + 1 + 2 * nr)?;

        let x = xss.range(idx + 2 + 2 * nr, ne)?.to_vec();
        let y = xss.range(idx + 2 + 2 * nr + ne, ne)?.to_vec();

        if nr == 0 {
            let region = Region1D::from_x_and_y(x, y, InterpolationScheme::LinLin)?;
            return Ok(Tabulation::Region(region));
        }

        let mut breakpoints = Vec::with_capacity(nr);
        for k in 0..nr {
            breakpoints.push(xss.get_usize(idx + 1 + k)?);
        }
        let mut schemes = Vec::with_capacity(nr);
        for k in 0..nr {
            schemes.push(xss.get_scheme(idx + 1 + nr + k)?);
        }

        if nr == 1 {
            if breakpoints[0] != x.len() {
                return Err(SlateError::BadBreakpoints {
                    context: "Tabulation",
                });
            }
            let region = Region1D::from_x_and_y(x, y, schemes[0])?;
            return Ok(Tabulation::Region(region));
        }

        let regions = MultiRegion1D::from_breakpoints(breakpoints, schemes, x, y)?;
        Ok(Tabulation::MultiRegion(regions))
    }

    // Number of xss words the table record starting at `idx` occupies,
    // so callers can step past it to the next record.
    pub fn xss_length(xss: &XssArray, idx: usize) -> Result<usize, SlateError> {
        let nr = xss.get_usize(idx)?;
        let ne = xss.get_usize(idx + 1 + 2 * nr)?;
        Ok(2 + 2 * nr + 2 * ne)
    }

    pub fn min_x(&self) -> f64 {
        match self {
            Tabulation::Region(region) => region.min_x(),
            Tabulation::MultiRegion(regions) => regions.min_x(),
        }
    }

    pub fn max_x(&self) -> f64 {
        match self {
            Tabulation::Region(region) => region.max_x(),
            Tabulation::MultiRegion(regions) => regions.max_x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xss_degenerate_nr_zero() {
        // NR = 0, NE = 3, x = [1, 2, 3], y = [10, 20, 30]
        let xss = XssArray::new(vec![0.0, 3.0, 1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        let table = Tabulation::from_xss(&xss, 0).unwrap();

        assert!(matches!(
            &table,
            Tabulation::Region(region)
                if region.interpolation_scheme == InterpolationScheme::LinLin
        ));
        assert_eq!(table.evaluate(1.5), 15.0);
        assert_eq!(Tabulation::xss_length(&xss, 0).unwrap(), 8);
    }

    #[test]
    fn test_from_xss_single_region() {
        // NR = 1, NBT = [3], INT = [1] (histogram), NE = 3
        let xss =
            XssArray::new(vec![1.0, 3.0, 1.0, 3.0, 1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        let table = Tabulation::from_xss(&xss, 0).unwrap();

        assert!(matches!(&table, Tabulation::Region(_)));
        assert_eq!(table.evaluate(1.5), 10.0);
        assert_eq!(table.evaluate(2.5), 20.0);
        assert_eq!(Tabulation::xss_length(&xss, 0).unwrap(), 10);
    }

    #[test]
    fn test_from_xss_multi_region() {
        // NR = 2, NBT = [2, 4], INT = [1, 2], NE = 4, record offset by one
        let xss = XssArray::new(vec![
            99.0, // leading word not part of the record
            2.0, 2.0, 4.0, 1.0, 2.0, 4.0, 1.0, 2.0, 3.0, 4.0, 10.0, 20.0, 30.0, 40.0,
        ]);
        let table = Tabulation::from_xss(&xss, 1).unwrap();

        assert!(matches!(&table, Tabulation::MultiRegion(_)));
        // Histogram below the breakpoint, lin-lin above it
        assert_eq!(table.evaluate(1.5), 10.0);
        assert_eq!(table.evaluate(2.5), 25.0);
        assert_eq!(table.min_x(), 1.0);
        assert_eq!(table.max_x(), 4.0);
        assert_eq!(Tabulation::xss_length(&xss, 1).unwrap(), 14);
    }

    #[test]
    fn test_from_xss_truncated_record() {
        // Claims NE = 5 but the array ends early
        let xss = XssArray::new(vec![0.0, 5.0, 1.0, 2.0, 3.0]);
        assert!(matches!(
            Tabulation::from_xss(&xss, 0),
            Err(SlateError::XssOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_from_xss_bad_scheme_code() {
        let xss =
            XssArray::new(vec![1.0, 3.0, 9.0, 3.0, 1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        assert_eq!(
            Tabulation::from_xss(&xss, 0),
            Err(SlateError::InvalidInterpolationScheme(9))
        );
    }

    #[test]
    fn test_from_xss_breakpoint_not_covering_grid() {
        // NR = 1 but NBT = [2] while NE = 3
        let xss =
            XssArray::new(vec![1.0, 2.0, 2.0, 3.0, 1.0, 2.0, 3.0, 10.0, 20.0, 30.0]);
        assert_eq!(
            Tabulation::from_xss(&xss, 0),
            Err(SlateError::BadBreakpoints {
                context: "Tabulation",
            })
        );
    }
}
