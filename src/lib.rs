#![allow(clippy::upper_case_acronyms)]

mod angle_energy;
mod error;
mod interpolation;
mod tabulated;
mod unitf64;
mod utils;
mod xss;

pub use angle_energy::{
    AngleEnergy, AngleEnergyPacket, GeneralEvaporation, STCoherentElastic, ScatteringLaw,
};
pub use error::SlateError;
pub use interpolation::InterpolationScheme;
pub use tabulated::{MultiRegion1D, Region1D, Tabulated1D, Tabulation, XY};
pub use unitf64::UnitF64;
pub use utils::ScriptedRng;
pub use xss::XssArray;
