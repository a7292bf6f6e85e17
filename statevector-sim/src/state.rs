//! Dense amplitude-vector storage and basis-state preparation.
//!
//! The state of an `n`-qubit register is the full vector of 2^n complex
//! amplitudes over the computational basis. A basis index is read as an
//! `n`-bit integer: bit k holds the value of qubit k, with bit 0 the
//! least-significant ("low") qubit.

use num_complex::Complex64;

/// Dense amplitude vector over the computational basis.
///
/// The buffer length is always an exact power of two. Gates and
/// measurements mutate it in place; the L2 norm stays at 1 up to
/// accumulated floating-point drift, with [`StateVector::renormalize`]
/// available to correct it.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amps: Vec<Complex64>,
}

impl StateVector {
    /// Prepare the computational-basis state `|index>` on `n_qubits` qubits.
    ///
    /// If `index >= 2^n_qubits` the vector comes back all-zero; measurement
    /// treats that as a degenerate state rather than an error.
    pub fn basis(n_qubits: usize, index: usize) -> Self {
        let dim = 1usize << n_qubits;
        let mut amps = vec![Complex64::new(0.0, 0.0); dim];
        if index < dim {
            amps[index] = Complex64::new(1.0, 0.0);
        }
        Self { amps }
    }

    /// Number of amplitudes (2^n).
    pub fn num_amplitudes(&self) -> usize {
        self.amps.len()
    }

    /// Number of qubits n.
    pub fn num_qubits(&self) -> usize {
        self.amps.len().trailing_zeros() as usize
    }

    /// Amplitude at a basis index.
    pub fn amp(&self, index: usize) -> Complex64 {
        self.amps[index]
    }

    /// Probability mass at a basis index.
    pub fn probability(&self, index: usize) -> f64 {
        self.amps[index].norm_sqr()
    }

    /// Raw amplitude slice (read-only).
    pub fn amps(&self) -> &[Complex64] {
        &self.amps
    }

    /// Mutable access to the amplitude slice.
    pub fn amps_mut(&mut self) -> &mut [Complex64] {
        &mut self.amps
    }

    /// Total probability mass `sum |amp_i|^2`.
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Rescale so the L2 norm is exactly 1. A zero vector is left alone.
    pub fn renormalize(&mut self) {
        let s2 = self.norm_sqr();
        if s2 <= 0.0 {
            return;
        }
        let s = s2.sqrt();
        for a in &mut self.amps {
            *a /= s;
        }
    }
}
