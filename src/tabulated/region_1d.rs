use crate::error::SlateError;
use crate::interpolation::InterpolationScheme;
use crate::tabulated::Tabulated1D;

//=====================================================================
// X/Y pair for tabulated data.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

//=====================================================================
// Region1D: a single interpolation region. Contains a set of X/Y
// pairs over a strictly increasing x-grid and the one interpolation
// scheme used across the whole region. Immutable once built.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct Region1D {
    pub data: Vec<XY>,
    pub interpolation_scheme: InterpolationScheme,
}

impl Region1D {
    pub fn from_x_and_y(
        x: Vec<f64>,
        y: Vec<f64>,
        interpolation_scheme: InterpolationScheme,
    ) -> Result<Self, SlateError> {
        if x.len() != y.len() {
            return Err(SlateError::LengthMismatch {
                context: "Region1D",
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(SlateError::TableTooShort {
                context: "Region1D",
                required: 2,
                actual: x.len(),
            });
        }
        if let Some(index) = (1..x.len()).find(|&i| x[i] <= x[i - 1]) {
            return Err(SlateError::NonIncreasingGrid {
                context: "Region1D",
                index,
            });
        }

        let data = x
            .into_iter()
            .zip(y)
            .map(|(x, y)| XY { x, y })
            .collect();

        Ok(Self {
            data,
            interpolation_scheme,
        })
    }

    pub fn min_x(&self) -> f64 {
        self.data[0].x
    }

    pub fn max_x(&self) -> f64 {
        self.data[self.data.len() - 1].x
    }
}

impl Tabulated1D for Region1D {
    // Evaluate the region at x. Outside the grid the value is clamped
    // to the nearest grid point: transport codes must never abort on a
    // boundary energy.
    fn evaluate(&self, x: f64) -> f64 {
        if x <= self.data[0].x {
            return self.data[0].y;
        }
        let last = self.data[self.data.len() - 1];
        if x >= last.x {
            return last.y;
        }

        // Find the bin that x falls into
        let idx = match self
            .data
            .binary_search_by(|xy| xy.x.partial_cmp(&x).unwrap())
        {
            // Exactly on a grid point, return the tabulated value
            Ok(idx) => return self.data[idx].y,
            // Inside a bin
            Err(idx) => idx - 1,
        };

        let lo = self.data[idx];
        let hi = self.data[idx + 1];

        match self.interpolation_scheme {
            InterpolationScheme::Histogram => lo.y,
            InterpolationScheme::LinLin => {
                lo.y + (hi.y - lo.y) * (x - lo.x) / (hi.x - lo.x)
            }
            InterpolationScheme::LinLog => {
                lo.y + (hi.y - lo.y) * (x / lo.x).ln() / (hi.x / lo.x).ln()
            }
            InterpolationScheme::LogLin => {
                lo.y * ((x - lo.x) * (hi.y / lo.y).ln() / (hi.x - lo.x)).exp()
            }
            InterpolationScheme::LogLog => {
                lo.y * ((x / lo.x).ln() * (hi.y / lo.y).ln() / (hi.x / lo.x).ln()).exp()
            }
        }
    }
}
