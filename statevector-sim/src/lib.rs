//! # statevector-sim
//!
//! Dense state-vector quantum circuit simulator.
//!
//! An `n`-qubit register is stored as the full vector of 2^n complex
//! amplitudes. Gates mutate the vector in place through bit-indexed pair
//! (or quad) iteration; no Kronecker-expanded matrices are ever built, so
//! a 1-qubit gate costs O(2^n) with 4 multiply-adds per amplitude pair
//! and a 2-qubit gate O(2^n) with 16 per amplitude quad.
//!
//! ## Conventions
//!
//! - Bit k of a basis index holds qubit k; **bit 0 is the low qubit**.
//!   Ket strings print the highest qubit leftmost.
//! - 4×4 matrices are in **(high, low)** bit order: row/column 0 = (0,0),
//!   1 = (0,1), 2 = (1,0), 3 = (1,1). The controlled-gate lifter is the
//!   one place where (control, target) ordering is absorbed; see
//!   [`apply::apply_controlled_1q`].
//! - Measurement collapses in place and renormalizes the kept subspace.
//!   RNGs are threaded explicitly, so seeded runs reproduce exactly.
//!
//! ## Usage
//!
//! ```
//! use statevector_sim::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut psi = StateVector::basis(2, 0);
//! apply_1q(&hadamard(), &mut psi, 1);
//! apply_2q(&cnot(), &mut psi, 0, 1);   // Bell pair: (|00> + |11>)/sqrt(2)
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let outcome = measure_qubit_z(&mut psi, 0, &mut rng);
//! assert_eq!(measure_qubit_z(&mut psi, 1, &mut rng), outcome);
//! ```

pub mod apply;
pub mod gates;
pub mod measure;
pub mod pretty;
pub mod state;

pub mod prelude {
    pub use crate::apply::*;
    pub use crate::gates::*;
    pub use crate::measure::*;
    pub use crate::pretty::*;
    pub use crate::state::*;
}
