//! Standard gate matrices and the controlled-gate lifter.
//!
//! 2×2 matrices are row-major over the basis {|0>, |1>} of one qubit.
//! 4×4 matrices are row-major over the two-qubit basis in **(high, low)**
//! bit order: index 0 = (0,0), 1 = (0,1), 2 = (1,0), 3 = (1,1). The
//! 2-qubit kernel interprets every 4×4 matrix this way, independent of the
//! order in which the caller names the two qubits.

use num_complex::Complex64;

/// 2×2 unitary, row-major.
pub type Matrix2 = [[Complex64; 2]; 2];

/// 4×4 unitary, row-major, rows/columns in (high, low) bit order.
pub type Matrix4 = [[Complex64; 4]; 4];

/// Pauli-X (bit flip).
pub fn pauli_x() -> Matrix2 {
    let z = Complex64::new(0.0, 0.0);
    let o = Complex64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

/// Hadamard.
pub fn hadamard() -> Matrix2 {
    let s = 1.0 / 2.0_f64.sqrt();
    [
        [Complex64::new(s, 0.0), Complex64::new(s, 0.0)],
        [Complex64::new(s, 0.0), Complex64::new(-s, 0.0)],
    ]
}

/// Z-rotation: Rz(θ) = diag(e^{-iθ/2}, e^{+iθ/2}).
///
/// Rz(π) equals Pauli-Z up to a global phase of -i; global phase is
/// unobservable here, so Rz(π) serves as the Z gate throughout.
pub fn rz(theta: f64) -> Matrix2 {
    let z = Complex64::new(0.0, 0.0);
    [
        [Complex64::from_polar(1.0, -theta / 2.0), z],
        [z, Complex64::from_polar(1.0, theta / 2.0)],
    ]
}

/// Controlled-NOT in (high, low) ordering: the permutation
/// |00> → |00>, |01> → |01>, |10> → |11>, |11> → |10>: the low qubit
/// flips wherever the high bit is set.
pub fn cnot() -> Matrix4 {
    let z = Complex64::new(0.0, 0.0);
    let o = Complex64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, o, z, z],
        [z, z, z, o],
        [z, z, o, z],
    ]
}

/// Lift a 1-qubit unitary to the 4×4 matrix of its controlled version.
///
/// The result is in (high, low) ordering, so the placement of `u` depends
/// on which of the pair is the control:
///
/// - `control_is_high`: block-diagonal, identity where high = 0 and `u`
///   on the low qubit where high = 1.
/// - otherwise: identity where low = 0 (rows 0 and 2), `u` on the high
///   qubit across the {01, 11} subspace (rows/columns 1 and 3).
pub fn controlled(u: &Matrix2, control_is_high: bool) -> Matrix4 {
    let z = Complex64::new(0.0, 0.0);
    let o = Complex64::new(1.0, 0.0);
    let mut u4 = [[z; 4]; 4];

    if control_is_high {
        u4[0][0] = o;
        u4[1][1] = o;
        u4[2][2] = u[0][0];
        u4[2][3] = u[0][1];
        u4[3][2] = u[1][0];
        u4[3][3] = u[1][1];
    } else {
        u4[0][0] = o;
        u4[2][2] = o;
        u4[1][1] = u[0][0];
        u4[1][3] = u[0][1];
        u4[3][1] = u[1][0];
        u4[3][3] = u[1][1];
    }
    u4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unitary_2(u: &Matrix2) -> bool {
        // u * u† = I
        let mut prod = [[Complex64::new(0.0, 0.0); 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    prod[i][j] += u[i][k] * u[j][k].conj();
                }
            }
        }
        let mut ok = true;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                ok &= (prod[i][j].re - expected).abs() < 1e-12 && prod[i][j].im.abs() < 1e-12;
            }
        }
        ok
    }

    #[test]
    fn standard_gates_are_unitary() {
        assert!(is_unitary_2(&pauli_x()), "X must be unitary");
        assert!(is_unitary_2(&hadamard()), "H must be unitary");
        assert!(is_unitary_2(&rz(0.37)), "Rz must be unitary");
    }

    #[test]
    fn rz_pi_matches_pauli_z_up_to_global_phase() {
        let u = rz(std::f64::consts::PI);
        // diag(-i, i) = -i * diag(1, -1)
        assert!((u[0][0] - Complex64::new(0.0, -1.0)).norm() < 1e-12);
        assert!((u[1][1] - Complex64::new(0.0, 1.0)).norm() < 1e-12);
        assert!(u[0][1].norm() < 1e-12 && u[1][0].norm() < 1e-12);
    }

    #[test]
    fn cnot_is_the_expected_permutation() {
        let u = cnot();
        let ones = [(0, 0), (1, 1), (2, 3), (3, 2)];
        for i in 0..4 {
            for j in 0..4 {
                let expected = if ones.contains(&(i, j)) { 1.0 } else { 0.0 };
                assert!(
                    (u[i][j].re - expected).abs() < 1e-12 && u[i][j].im.abs() < 1e-12,
                    "cnot[{}][{}] should be {}",
                    i,
                    j,
                    expected
                );
            }
        }
    }

    #[test]
    fn controlled_x_with_high_control_equals_cnot() {
        let lifted = controlled(&pauli_x(), true);
        let reference = cnot();
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (lifted[i][j] - reference[i][j]).norm() < 1e-12,
                    "mismatch at [{}][{}]",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn controlled_x_with_low_control_swaps_01_and_11() {
        let u4 = controlled(&pauli_x(), false);
        let ones = [(0, 0), (2, 2), (1, 3), (3, 1)];
        for i in 0..4 {
            for j in 0..4 {
                let expected = if ones.contains(&(i, j)) { 1.0 } else { 0.0 };
                assert!(
                    (u4[i][j].re - expected).abs() < 1e-12 && u4[i][j].im.abs() < 1e-12,
                    "controlled-low X[{}][{}] should be {}",
                    i,
                    j,
                    expected
                );
            }
        }
    }
}
