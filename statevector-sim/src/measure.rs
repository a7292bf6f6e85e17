//! Projective Z-basis measurement with in-place collapse.
//!
//! Outcomes are weighted by |amplitude|², sampled from a caller-supplied
//! RNG. Single-qubit probabilities within [`SNAP_EPS`] of 0 or 1 are
//! snapped to the endpoint before sampling, so syndrome extraction from a
//! near-eigenstate stays deterministic after long gate sequences.

use num_complex::Complex64;
use rand::Rng;

use crate::state::StateVector;

/// Snap threshold for single-qubit outcome probabilities.
///
/// Large enough to absorb rounding drift over many kernel applications,
/// small enough not to mask a genuine superposition.
pub const SNAP_EPS: f64 = 1e-6;

/// Measure the whole register in the computational basis.
///
/// Renormalizes, samples a basis index by cumulative probability, and
/// collapses the vector to a one-hot at the sampled index. Numerical
/// drift that leaves the cumulative walk short of the draw falls back to
/// the last index.
pub fn measure_all<R: Rng>(psi: &mut StateVector, rng: &mut R) -> usize {
    psi.renormalize();

    let r: f64 = rng.gen();
    let mut cum = 0.0;
    let mut sampled = psi.num_amplitudes() - 1;
    for i in 0..psi.num_amplitudes() {
        cum += psi.probability(i);
        if r < cum {
            sampled = i;
            break;
        }
    }

    let amps = psi.amps_mut();
    for a in amps.iter_mut() {
        *a = Complex64::new(0.0, 0.0);
    }
    amps[sampled] = Complex64::new(1.0, 0.0);
    sampled
}

/// Measure a single qubit in the Z basis and collapse the state.
///
/// Returns the outcome bit. The rejected half of the vector is zeroed and
/// the kept half rescaled to unit norm. An out-of-range `target` or a
/// zero-norm state returns 0 and leaves the vector untouched.
pub fn measure_qubit_z<R: Rng>(psi: &mut StateVector, target: usize, rng: &mut R) -> u8 {
    let n = psi.num_amplitudes();
    let step = match 1usize.checked_shl(target as u32) {
        Some(s) if s < n => s,
        _ => return 0,
    };
    let block = step << 1;

    let mut n0 = 0.0;
    let mut n1 = 0.0;
    for base in (0..n).step_by(block) {
        for off in 0..step {
            n0 += psi.probability(base + off);
            n1 += psi.probability(base + off + step);
        }
    }
    let denom = n0 + n1;
    if denom <= 0.0 {
        return 0;
    }

    let mut p0 = n0 / denom;
    if p0 <= SNAP_EPS {
        p0 = 0.0;
    } else if p0 >= 1.0 - SNAP_EPS {
        p0 = 1.0;
    }

    let outcome: u8 = if p0 == 0.0 {
        1
    } else if p0 == 1.0 {
        0
    } else if rng.gen::<f64>() < p0 {
        0
    } else {
        1
    };

    let kept_norm = if outcome == 0 { n0 } else { n1 };
    let scale = if kept_norm > 0.0 {
        1.0 / kept_norm.sqrt()
    } else {
        0.0
    };

    let amps = psi.amps_mut();
    let zero = Complex64::new(0.0, 0.0);
    for base in (0..n).step_by(block) {
        for off in 0..step {
            if outcome == 0 {
                amps[base + off] *= scale;
                amps[base + off + step] = zero;
            } else {
                amps[base + off] = zero;
                amps[base + off + step] *= scale;
            }
        }
    }
    outcome
}
