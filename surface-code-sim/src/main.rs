//! Command-line front end for repeated surface-code syndrome extraction.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use surface_code_sim::prelude::*;

/// Rotated surface-code syndrome extraction on a dense state-vector simulator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Code distance (odd, >= 3)
    #[arg(long, default_value_t = 3)]
    d: usize,

    /// Inject X on data qubit I before the first round (repeatable)
    #[arg(long = "x", value_name = "I")]
    x_errors: Vec<usize>,

    /// Inject Z on data qubit I before the first round (repeatable)
    #[arg(long = "z", value_name = "I")]
    z_errors: Vec<usize>,

    /// Inject Y on data qubit I before the first round (repeatable)
    #[arg(long = "y", value_name = "I")]
    y_errors: Vec<usize>,

    /// Number of syndrome-extraction rounds
    #[arg(long, default_value_t = 1)]
    rounds: usize,

    /// Per-data-qubit depolarizing probability applied before each round
    #[arg(long = "noise-p", default_value_t = 0.0)]
    noise_p: f64,

    /// RNG seed for a reproducible run (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn fmt_bits(bits: &[u8]) -> String {
    let inner: Vec<String> = bits.iter().map(|b| b.to_string()).collect();
    format!("[{}]", inner.join(","))
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    eprintln!("run with --help for usage");
    std::process::exit(2);
}

fn main() {
    let args = Args::parse();

    if args.d < 3 || args.d % 2 == 0 {
        fail(&format!("--d must be odd and >= 3 (got {})", args.d));
    }
    if args.rounds == 0 {
        fail("--rounds must be a positive integer");
    }
    if !(0.0..=1.0).contains(&args.noise_p) {
        fail(&format!("--noise-p must lie in [0, 1] (got {})", args.noise_p));
    }
    let n_data = args.d * args.d;
    for &q in args.x_errors.iter().chain(&args.z_errors).chain(&args.y_errors) {
        if q >= n_data {
            fail(&format!(
                "data qubit index must be in 0..{} (got {})",
                n_data, q
            ));
        }
    }

    let config = ExtractionConfig {
        d: args.d,
        x_errors: args.x_errors,
        z_errors: args.z_errors,
        y_errors: args.y_errors,
        rounds: args.rounds,
        noise_p: args.noise_p,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sc = SurfaceCode::new(config.d);
    println!(
        "rotated surface code d={}: {} data qubits, {} Z + {} X stabilizers ({} qubits total), noise p={}",
        sc.distance(),
        sc.n_data(),
        sc.z_checks().len(),
        sc.x_checks().len(),
        sc.n_qubits(),
        config.noise_p,
    );

    for (round, outcome) in extract_syndromes(&config, &mut rng).iter().enumerate() {
        println!(
            "round {:>3}:  Z={}  X={}",
            round + 1,
            fmt_bits(&outcome.z),
            fmt_bits(&outcome.x)
        );
    }
}
