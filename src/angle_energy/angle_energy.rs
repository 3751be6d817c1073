use crate::angle_energy::{GeneralEvaporation, STCoherentElastic};

//=====================================================================
// One sampled scattering outcome: the cosine of the scattering angle
// and the outgoing energy.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEnergyPacket {
    pub mu: f64,
    pub energy: f64,
}

//=====================================================================
// Contract implemented by every scattering law. A transport driver
// holds this abstraction and never switches on the concrete law.
//
// `rng` must yield a fresh uniform variate in [0, 1) on every call;
// each law is self-contained in how many variates it draws. The pdf
// methods return None when the law cannot express the density
// analytically.
//=====================================================================
pub trait AngleEnergy {
    fn sample_angle_energy(
        &self,
        e_in: f64,
        rng: &mut dyn FnMut() -> f64,
    ) -> AngleEnergyPacket;

    fn angle_pdf(&self, e_in: f64, mu: f64) -> Option<f64>;

    fn pdf(&self, e_in: f64, mu: f64, e_out: f64) -> Option<f64>;
}

//=====================================================================
// Sealed set of scattering laws. The physics model list is fixed at
// build time, so an enum gives exhaustive-match safety while still
// letting drivers hold one polymorphic handle.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub enum ScatteringLaw {
    CoherentElastic(STCoherentElastic),
    GeneralEvaporation(GeneralEvaporation),
}

impl AngleEnergy for ScatteringLaw {
    fn sample_angle_energy(
        &self,
        e_in: f64,
        rng: &mut dyn FnMut() -> f64,
    ) -> AngleEnergyPacket {
        match self {
            ScatteringLaw::CoherentElastic(law) => law.sample_angle_energy(e_in, rng),
            ScatteringLaw::GeneralEvaporation(law) => law.sample_angle_energy(e_in, rng),
        }
    }

    fn angle_pdf(&self, e_in: f64, mu: f64) -> Option<f64> {
        match self {
            ScatteringLaw::CoherentElastic(law) => law.angle_pdf(e_in, mu),
            ScatteringLaw::GeneralEvaporation(law) => law.angle_pdf(e_in, mu),
        }
    }

    fn pdf(&self, e_in: f64, mu: f64, e_out: f64) -> Option<f64> {
        match self {
            ScatteringLaw::CoherentElastic(law) => law.pdf(e_in, mu, e_out),
            ScatteringLaw::GeneralEvaporation(law) => law.pdf(e_in, mu, e_out),
        }
    }
}
