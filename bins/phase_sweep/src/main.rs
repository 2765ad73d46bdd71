use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quantum::Toolbox;
use rng::CircuitRng;
use simulator::{
    output::write_sweep_csv, parse_circuit, phase_sweep, random::random_circuit, Circuit,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Wire and peek probabilities over one animation cycle")]
struct Args {
    /// Number of wires
    #[arg(long, default_value_t = 3)]
    wires: usize,

    /// Circuit text (see the emulator for the notation)
    #[arg(long, default_value = "H(t) | @, X(t) | ., @, R(t) | ?, ?, ?")]
    circuit: String,

    /// Use a random circuit of this many slices instead
    #[arg(long)]
    random_depth: Option<usize>,

    /// RNG seed for --random-depth
    #[arg(long, default_value = "phase-sweep")]
    seed: String,

    /// Number of phases sampled over [0, 2π)
    #[arg(long, default_value_t = 126)]
    samples: usize,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output CSV path
    #[arg(long, default_value = "phase_sweep.csv")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if args.samples == 0 {
        bail!("--samples must be > 0");
    }
    if args.wires == 0 || args.wires > 12 {
        bail!("--wires must be between 1 and 12 (got {})", args.wires);
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let toolbox = Toolbox::standard();
    let circuit = match args.random_depth {
        Some(depth) => {
            let mut rng = CircuitRng::new(args.seed.as_bytes());
            let mut circuit = Circuit::new(args.wires);
            for slice in random_circuit(args.wires, depth, &toolbox, &mut rng) {
                circuit.push(slice)?;
            }
            circuit
        }
        None => parse_circuit(&args.circuit, args.wires, &toolbox)
            .with_context(|| format!("parsing circuit '{}'", args.circuit))?,
    };

    tracing::info!(slices = circuit.len(), samples = args.samples, "starting sweep");
    let start = Instant::now();
    let samples = phase_sweep(&circuit, &toolbox, args.samples)?;
    let elapsed = start.elapsed().as_secs_f64();

    write_sweep_csv(&args.out, &samples, args.wires)
        .with_context(|| format!("writing {}", args.out.display()))?;

    println!(
        "Sweep: wires={} slices={} samples={} -> {} ({:.3} s)",
        args.wires,
        circuit.len(),
        args.samples,
        args.out.display(),
        elapsed
    );
    Ok(())
}
