use crate::error::SlateError;
use crate::interpolation::InterpolationScheme;
use crate::tabulated::{Region1D, Tabulated1D};

//=====================================================================
// MultiRegion1D: a piecewise tabulated function stitched together
// from several Region1D segments, each with its own interpolation
// scheme. Adjacent segments share their boundary grid point, so the
// stitched function is continuous at every breakpoint by
// construction. A shared breakpoint is evaluated by the lower-index
// segment.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct MultiRegion1D {
    pub regions: Vec<Region1D>,
}

impl MultiRegion1D {
    pub fn new(regions: Vec<Region1D>) -> Result<Self, SlateError> {
        if regions.is_empty() {
            return Err(SlateError::TableTooShort {
                context: "MultiRegion1D",
                required: 1,
                actual: 0,
            });
        }
        // Segments must tile the grid contiguously in increasing order
        if let Some(index) = (1..regions.len())
            .find(|&i| regions[i].min_x() != regions[i - 1].max_x())
        {
            return Err(SlateError::NonIncreasingGrid {
                context: "MultiRegion1D",
                index,
            });
        }
        Ok(Self { regions })
    }

    // Build from the NBT/INT breakpoint layout: `breakpoints` holds
    // one-based cumulative point counts, one per region, the last of
    // which must equal the grid length. The boundary point belongs to
    // both adjacent regions.
    pub fn from_breakpoints(
        breakpoints: Vec<usize>,
        schemes: Vec<InterpolationScheme>,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self, SlateError> {
        if breakpoints.len() != schemes.len() {
            return Err(SlateError::LengthMismatch {
                context: "MultiRegion1D",
                x_len: breakpoints.len(),
                y_len: schemes.len(),
            });
        }
        if x.len() != y.len() {
            return Err(SlateError::LengthMismatch {
                context: "MultiRegion1D",
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if breakpoints.is_empty()
            || breakpoints.windows(2).any(|w| w[1] <= w[0])
            || *breakpoints.last().unwrap() != x.len()
        {
            return Err(SlateError::BadBreakpoints {
                context: "MultiRegion1D",
            });
        }

        let mut regions = Vec::with_capacity(breakpoints.len());
        let mut start = 0;
        for (&breakpoint, &scheme) in breakpoints.iter().zip(&schemes) {
            let region = Region1D::from_x_and_y(
                x[start..breakpoint].to_vec(),
                y[start..breakpoint].to_vec(),
                scheme,
            )?;
            regions.push(region);
            // Shared boundary: the next region starts on this region's
            // last grid point
            start = breakpoint - 1;
        }

        Self::new(regions)
    }

    pub fn min_x(&self) -> f64 {
        self.regions[0].min_x()
    }

    pub fn max_x(&self) -> f64 {
        self.regions[self.regions.len() - 1].max_x()
    }
}

impl Tabulated1D for MultiRegion1D {
    // Delegate to the owning segment; the lower-index segment owns a
    // shared breakpoint. Out-of-domain values clamp through the first
    // or last segment.
    fn evaluate(&self, x: f64) -> f64 {
        let idx = self
            .regions
            .partition_point(|region| region.max_x() < x)
            .min(self.regions.len() - 1);
        self.regions[idx].evaluate(x)
    }
}
