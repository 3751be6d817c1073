mod angle_energy;
mod coherent_elastic;
mod general_evaporation;

pub use angle_energy::{AngleEnergy, AngleEnergyPacket, ScatteringLaw};
pub use coherent_elastic::STCoherentElastic;
pub use general_evaporation::GeneralEvaporation;
