//! # surface-code-sim
//!
//! Repeated stabilizer readout for the rotated surface code, built on the
//! dense state-vector engine from `statevector-sim`.
//!
//! ## Layout
//!
//! Data qubits live on a d×d grid (d odd, ≥ 3), indexed row-major. Every
//! 2×2 cell of the grid hosts one weight-4 stabilizer, read out through a
//! dedicated ancilla qubit:
//!
//! - **Z stabilizer** Z⊗Z⊗Z⊗Z on plaquettes with even coordinate
//!   parity: flags X errors on its support.
//! - **X stabilizer** X⊗X⊗X⊗X on the odd-parity plaquettes: flags Z
//!   errors on its support.
//!
//! A syndrome round resets each ancilla, entangles it with its four data
//! qubits, and measures it in Z; the collected bits form the syndrome.
//!
//! ## Pure states, two runs
//!
//! The engine tracks pure states only. Measuring Z stabilizers on a
//! |+>^n preparation would destroy the phase information the X
//! stabilizers need, so [`simulation`] runs two fresh simulations per
//! extraction (a |0>-basis run for Z syndromes and a |+>-basis run for X
//! syndromes) and injects identical errors into both.

pub mod lattice;
pub mod noise;
pub mod rounds;
pub mod simulation;

pub mod prelude {
    pub use crate::lattice::*;
    pub use crate::noise::*;
    pub use crate::rounds::*;
    pub use crate::simulation::*;
}
