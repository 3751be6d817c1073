use crate::angle_energy::{AngleEnergy, AngleEnergyPacket};
use crate::error::SlateError;
use crate::xss::XssArray;

//=====================================================================
// STCoherentElastic: coherent elastic scattering data for a single
// nuclide at a single temperature. Two parallel vectors hold the
// Bragg-edge energies (strictly increasing) and the cumulative
// structure-factor sum valid at and above each edge. A zero-length
// table is legal and means no coherent elastic scattering at any
// energy.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct STCoherentElastic {
    bragg_edges: Vec<f64>,
    structure_factor_sum: Vec<f64>,
}

impl STCoherentElastic {
    pub fn new(
        bragg_edges: Vec<f64>,
        structure_factor_sum: Vec<f64>,
    ) -> Result<Self, SlateError> {
        if bragg_edges.len() != structure_factor_sum.len() {
            return Err(SlateError::LengthMismatch {
                context: "STCoherentElastic",
                x_len: bragg_edges.len(),
                y_len: structure_factor_sum.len(),
            });
        }
        if let Some(index) =
            (1..bragg_edges.len()).find(|&i| bragg_edges[i] <= bragg_edges[i - 1])
        {
            return Err(SlateError::NonIncreasingGrid {
                context: "STCoherentElastic",
                index,
            });
        }
        Ok(Self {
            bragg_edges,
            structure_factor_sum,
        })
    }

    // Build from the xss record starting at `idx`: NE, then NE edge
    // energies, then NE cumulative structure-factor values.
    pub fn from_xss(xss: &XssArray, idx: usize) -> Result<Self, SlateError> {
        let ne = xss.get_usize(idx)?;
        let bragg_edges = xss.range(idx + 1, ne)?.to_vec();
        let structure_factor_sum = xss.range(idx + 1 + ne, ne)?.to_vec();
        Self::new(bragg_edges, structure_factor_sum)
    }

    // Coherent elastic scattering cross section at energy E. Below the
    // first Bragg edge no diffraction peak can contribute, so the
    // cross section is zero; at and above the last edge every peak
    // contributes. In between, the cumulative sum of the greatest edge
    // at or below E applies, found as the first edge strictly above E
    // stepped back by one.
    pub fn xs(&self, e: f64) -> f64 {
        if self.bragg_edges.is_empty() {
            return 0.0;
        }

        if e <= self.bragg_edges[0] {
            0.0
        } else if e >= self.bragg_edges[self.bragg_edges.len() - 1] {
            self.structure_factor_sum[self.structure_factor_sum.len() - 1] / e
        } else {
            let l = self.bragg_edges.partition_point(|&edge| edge <= e) - 1;
            self.structure_factor_sum[l] / e
        }
    }

    pub fn bragg_edges(&self) -> &[f64] {
        &self.bragg_edges
    }

    pub fn structure_factor_sum(&self) -> &[f64] {
        &self.structure_factor_sum
    }
}

impl AngleEnergy for STCoherentElastic {
    // Deterministic given E_in: the scattering cosine follows from the
    // bracketing Bragg edge and no energy is lost. Draws no variates.
    // Below the first edge the law falls back to forward scatter
    // (Ei = 0, mu = 1), intentionally asymmetric with `xs`, which is
    // zero there.
    fn sample_angle_energy(
        &self,
        e_in: f64,
        _rng: &mut dyn FnMut() -> f64,
    ) -> AngleEnergyPacket {
        if self.bragg_edges.is_empty() {
            return AngleEnergyPacket {
                mu: 1.0,
                energy: 0.0,
            };
        }

        // Bragg edge of scatter
        let last = self.bragg_edges[self.bragg_edges.len() - 1];
        let ei = if e_in <= self.bragg_edges[0] {
            0.0
        } else if e_in >= last {
            last
        } else {
            let l = self.bragg_edges.partition_point(|&edge| edge <= e_in) - 1;
            self.bragg_edges[l]
        };

        AngleEnergyPacket {
            mu: 1.0 - 2.0 * ei / e_in,
            energy: e_in,
        }
    }

    // The angle is a deterministic function of the bracketing Bragg
    // edge, not a continuous density.
    fn angle_pdf(&self, _e_in: f64, _mu: f64) -> Option<f64> {
        None
    }

    fn pdf(&self, _e_in: f64, _mu: f64, _e_out: f64) -> Option<f64> {
        None
    }
}
