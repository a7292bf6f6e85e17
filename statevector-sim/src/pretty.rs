//! Human-readable rendering of a state vector.
//!
//! Terms are listed in descending probability, one ket per line, with the
//! highest qubit leftmost in the ket string. Formatting only; nothing
//! here mutates the state.

use num_complex::Complex64;

use crate::state::StateVector;

/// Display options for [`format_state`].
#[derive(Debug, Clone)]
pub struct PrettyOptions {
    /// Keep at most this many terms; 0 means no limit.
    pub max_terms: usize,
    /// Drop terms with probability below this.
    pub cutoff: f64,
    /// Digits after the decimal point.
    pub precision: usize,
    /// Append a probability column.
    pub show_prob: bool,
    /// Append a phase column (radians, in [-π, π]).
    pub show_phase: bool,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            max_terms: 0,
            cutoff: 1e-12,
            precision: 6,
            show_prob: true,
            show_phase: false,
        }
    }
}

/// Ket string for a basis index: highest qubit first.
pub fn ket_string(index: usize, n_qubits: usize) -> String {
    let mut s = vec![b'0'; n_qubits];
    for bit in 0..n_qubits {
        if index & (1 << bit) != 0 {
            s[n_qubits - 1 - bit] = b'1';
        }
    }
    String::from_utf8(s).expect("ket string is ASCII")
}

fn fmt_complex(z: Complex64, precision: usize) -> String {
    format!("({:.p$}{:+.p$}i)", z.re, z.im, p = precision)
}

/// Render the state as a probability-sorted ket table.
///
/// Amplitudes are shown lightly renormalized so the listed probabilities
/// sum to 1 even when the vector has drifted; a zero-norm vector renders
/// as `(all zero)`.
pub fn format_state(psi: &StateVector, opts: &PrettyOptions) -> String {
    let n_qubits = psi.num_qubits();
    let s2 = psi.norm_sqr();
    if s2 == 0.0 {
        return "|ψ> = (all zero)\n".to_string();
    }
    let s = s2.sqrt();

    let mut terms: Vec<(usize, Complex64, f64)> = (0..psi.num_amplitudes())
        .filter_map(|i| {
            let amp = psi.amp(i) / s;
            let prob = amp.norm_sqr();
            (prob >= opts.cutoff).then_some((i, amp, prob))
        })
        .collect();
    terms.sort_by(|a, b| b.2.partial_cmp(&a.2).expect("probabilities are finite"));
    if opts.max_terms > 0 && terms.len() > opts.max_terms {
        terms.truncate(opts.max_terms);
    }

    let mut out = format!(
        "|ψ> (n={} qubits)  nonzero terms: {}  (cutoff={:e})\n",
        n_qubits,
        terms.len(),
        opts.cutoff
    );
    for (index, amp, prob) in &terms {
        out.push_str(&format!(
            "  |{}>  amp={}",
            ket_string(*index, n_qubits),
            fmt_complex(*amp, opts.precision)
        ));
        if opts.show_prob {
            out.push_str(&format!("  P={:.p$}", prob, p = opts.precision));
        }
        if opts.show_phase {
            out.push_str(&format!("  phase={:.p$}", amp.im.atan2(amp.re), p = opts.precision));
        }
        out.push('\n');
    }
    out
}
