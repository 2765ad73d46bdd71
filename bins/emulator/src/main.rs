use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linalg::{fmt_c64, ComplexExt, Matrix};
use quantum::Toolbox;
use rng::CircuitRng;
use simulator::{
    format_circuit, parse_circuit, random::random_circuit, Circuit, PhaseClock, Simulation,
    Snapshot,
};

/// Dense state-vector circuit emulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of wires in the register
    #[arg(long, default_value_t = 2)]
    wires: usize,

    /// Circuit text: slices separated by '|', slots by ','
    /// ('.' empty, '@' control, 'o' anti-control, '?' peek, else a gate symbol)
    #[arg(long, default_value = "H | @, X | ?, ?")]
    circuit: String,

    /// Replace the circuit by a random one of this many slices
    #[arg(long)]
    random_depth: Option<usize>,

    /// RNG seed for --random-depth
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Animation phase in radians (wrapped into [0, 2π))
    #[arg(long, default_value_t = 0.0)]
    phase: f64,

    /// Number of clock ticks to run, printing a snapshot after each
    #[arg(long, default_value_t = 0)]
    ticks: usize,

    /// Print every slice operator
    #[arg(long)]
    operators: bool,

    /// Print every intermediate state instead of the output only
    #[arg(long)]
    intermediate: bool,

    /// List the toolbox and exit
    #[arg(long)]
    list_gates: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let toolbox = Toolbox::standard();

    if args.list_gates {
        for (_, gate) in toolbox.iter() {
            println!("{:8} {:28} {}", gate.symbol(), gate.name(), gate.matrix());
        }
        return Ok(());
    }

    if args.wires == 0 || args.wires > 12 {
        bail!("--wires must be between 1 and 12 (got {})", args.wires);
    }

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
    tracing::info!(wires = args.wires, slices = circuit.len(), "circuit ready");

    let mut sim = Simulation::new(circuit, toolbox, PhaseClock::default());
    sim.set_phase(args.phase);

    println!("Circuit: {}", format_circuit(&sim.circuit, sim.toolbox()));

    if args.operators {
        for (k, slice) in sim.circuit.slices().iter().enumerate() {
            println!("Slice {} operator = {}", k, slice.operator(sim.toolbox())?);
        }
    }

    report(&sim.snapshot()?, args.wires, args.intermediate);
    for _ in 0..args.ticks {
        sim.tick();
        report(&sim.snapshot()?, args.wires, args.intermediate);
    }

    Ok(())
}

fn report(snapshot: &Snapshot, wires: usize, intermediate: bool) {
    println!("--- phase = {:.3} ---", snapshot.phase);

    if intermediate {
        for (k, state) in snapshot.states.iter().enumerate() {
            println!("after {} slice(s):", k);
            print_state(state, wires);
        }
    } else {
        println!("output:");
        print_state(snapshot.output(), wires);
    }

    for (k, p) in snapshot.wire_probabilities.iter().enumerate() {
        println!("P(wire {} = 1) = {:.4}", k, p);
    }

    for peek in &snapshot.peeks {
        let conditional = match peek.stats.conditional_defined() {
            Some(p) => format!("{:.4}", p),
            None => "N/A".to_string(),
        };
        if peek.stats.can_differ {
            println!(
                "peek slice {} wire {}: P(on | controls) = {}, P(on and controls) = {:.4}",
                peek.slice, peek.wire, conditional, peek.stats.total
            );
        } else {
            println!("peek slice {} wire {}: P(on) = {}", peek.slice, peek.wire, conditional);
        }
    }
}

fn print_state(state: &Matrix, wires: usize) {
    for (index, amp) in state.column_values().into_iter().enumerate() {
        if amp.norm2() < 1e-12 {
            continue;
        }
        println!(
            "  |{:0width$b}>  {:>18}  p = {:.4}",
            index,
            fmt_c64(amp),
            amp.norm2(),
            width = wires
        );
    }
}
