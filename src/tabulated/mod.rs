mod multi_region_1d;
mod region_1d;
mod tabulated_1d;

pub use multi_region_1d::MultiRegion1D;
pub use region_1d::{Region1D, XY};
pub use tabulated_1d::{Tabulated1D, Tabulation};
