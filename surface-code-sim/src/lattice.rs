//! Rotated surface-code lattice on a d×d data grid.
//!
//! Data qubits sit on the grid vertices, indexed row-major:
//! `data_index(r, c) = r*d + c`. The (d-1)×(d-1) plaquettes are colored
//! checkerboard-style by coordinate parity ((i+j) even → Z stabilizer,
//! odd → X stabilizer), so `|z_checks| + |x_checks| = (d-1)²` always.
//! Ancilla qubits are appended after the data block: first one per
//! Z check, then one per X check.

/// Immutable descriptor of a distance-d rotated surface code.
///
/// Check supports are stored as ordered 4-tuples
/// `(d(i,j), d(i+1,j), d(i,j+1), d(i+1,j+1))`; round implementations
/// iterate them in exactly this order, and syndrome bit k always refers
/// to check k of the corresponding list.
#[derive(Debug, Clone)]
pub struct SurfaceCode {
    d: usize,
    n_data: usize,
    z_checks: Vec<[usize; 4]>,
    x_checks: Vec<[usize; 4]>,
    z_anc: Vec<usize>,
    x_anc: Vec<usize>,
}

impl SurfaceCode {
    /// Build the lattice for an odd distance `d >= 3`.
    pub fn new(d: usize) -> Self {
        assert!(
            d >= 3 && d % 2 == 1,
            "surface-code distance must be odd and >= 3 (got {})",
            d
        );
        let n_data = d * d;

        let mut z_checks = Vec::new();
        let mut x_checks = Vec::new();
        for i in 0..d - 1 {
            for j in 0..d - 1 {
                let support = [
                    i * d + j,
                    (i + 1) * d + j,
                    i * d + (j + 1),
                    (i + 1) * d + (j + 1),
                ];
                if (i + j) % 2 == 0 {
                    z_checks.push(support);
                } else {
                    x_checks.push(support);
                }
            }
        }

        let z_anc: Vec<usize> = (0..z_checks.len()).map(|k| n_data + k).collect();
        let x_anc: Vec<usize> = (0..x_checks.len())
            .map(|k| n_data + z_checks.len() + k)
            .collect();

        Self {
            d,
            n_data,
            z_checks,
            x_checks,
            z_anc,
            x_anc,
        }
    }

    /// Code distance.
    pub fn distance(&self) -> usize {
        self.d
    }

    /// Number of data qubits (d²).
    pub fn n_data(&self) -> usize {
        self.n_data
    }

    /// Total qubit count: data plus one ancilla per stabilizer.
    pub fn n_qubits(&self) -> usize {
        self.n_data + self.z_anc.len() + self.x_anc.len()
    }

    /// Row-major index of the data qubit at grid position (row, col).
    pub fn data_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.d && col < self.d);
        row * self.d + col
    }

    /// Supports of the Z stabilizers, in enumeration order.
    pub fn z_checks(&self) -> &[[usize; 4]] {
        &self.z_checks
    }

    /// Supports of the X stabilizers, in enumeration order.
    pub fn x_checks(&self) -> &[[usize; 4]] {
        &self.x_checks
    }

    /// Ancilla qubit for each Z check.
    pub fn z_anc(&self) -> &[usize] {
        &self.z_anc
    }

    /// Ancilla qubit for each X check.
    pub fn x_anc(&self) -> &[usize] {
        &self.x_anc
    }
}
