use std::f64::consts::{PI, TAU};

use quantum::{state::basis_state, GateSlot, OperationSlice, QuantumError, Toolbox};
use simulator::{parse_circuit, Circuit, PhaseClock, SimError, Simulation};

#[test]
fn place_pads_and_remove_empty_compacts() {
    let toolbox = Toolbox::standard();
    let x = GateSlot::Unitary(toolbox.find("X").unwrap());
    let mut circuit = Circuit::new(2);
    assert_eq!(circuit.place(3, 1, x).unwrap(), GateSlot::Empty);
    assert_eq!(circuit.len(), 4);

    circuit.remove_empty_slices();
    assert_eq!(circuit.len(), 1);
    let out = circuit.output_state(&toolbox).unwrap();
    assert!(out.approx_eq(&basis_state(2, 0b10), 1e-12));

    assert!(matches!(
        circuit.place(0, 2, x),
        Err(SimError::Quantum(QuantumError::WireOutOfRange { wire: 2, num_wires: 2 }))
    ));
}

#[test]
fn insert_shifts_later_slices() {
    let toolbox = Toolbox::standard();
    let mut circuit = parse_circuit("X | ?", 1, &toolbox).unwrap();
    let h = GateSlot::Unitary(toolbox.find("H").unwrap());
    circuit
        .insert(1, OperationSlice::from_slots(vec![h]))
        .unwrap();
    assert_eq!(circuit.len(), 3);
    assert_eq!(circuit.slices()[2].slot(0), Some(GateSlot::Peek));
    assert!(circuit.insert(0, OperationSlice::empty(2)).is_err());
    assert!(circuit.remove(7).is_none());
}

#[test]
fn peek_readouts_follow_their_slice() {
    let toolbox = Toolbox::standard();
    // peek before and after flipping wire 1 under a satisfied control
    let circuit = parse_circuit("X, ? | @, X | ., ?", 2, &toolbox).unwrap();
    let peeks = circuit.peek_readouts(&toolbox).unwrap();
    assert_eq!(peeks.len(), 2);

    assert_eq!((peeks[0].slice, peeks[0].wire), (0, 1));
    assert!(peeks[0].stats.conditional.abs() < 1e-12);
    assert!(!peeks[0].stats.can_differ);

    assert_eq!((peeks[1].slice, peeks[1].wire), (2, 1));
    assert!((peeks[1].stats.total - 1.0).abs() < 1e-12);

    let probs = circuit.wire_probabilities(&toolbox).unwrap();
    assert!((probs[0] - 1.0).abs() < 1e-12);
    assert!((probs[1] - 1.0).abs() < 1e-12);
}

#[test]
fn clock_wraps_into_one_cycle() {
    let mut clock = PhaseClock::new(1.0);
    for _ in 0..20 {
        let phase = clock.tick();
        assert!((0.0..TAU).contains(&phase));
    }
    assert!((clock.phase() - (20.0f64).rem_euclid(TAU)).abs() < 1e-9);

    clock.set(-0.5);
    assert!((clock.phase() - (TAU - 0.5)).abs() < 1e-12);
    assert_eq!(PhaseClock::default().step(), 0.05);
}

#[test]
fn simulation_tick_updates_every_animated_gate() {
    let toolbox = Toolbox::standard();
    let circuit = parse_circuit("X(t), Y(t) | ?, ?", 2, &toolbox).unwrap();
    let mut sim = Simulation::new(circuit, toolbox, PhaseClock::new(PI / 2.0));

    let before = sim.snapshot().unwrap();
    assert_eq!(before.phase, 0.0);
    assert!(before.wire_probabilities.iter().all(|p| p.abs() < 1e-12));

    sim.tick();
    sim.tick();
    let after = sim.snapshot().unwrap();
    assert!((after.phase - PI).abs() < 1e-12);
    // both gates sit at their half-turn, so both wires read ON
    for p in &after.wire_probabilities {
        assert!((p - 1.0).abs() < 1e-9, "{:?}", after.wire_probabilities);
    }
    assert_eq!(after.peeks.len(), 2);
    assert_eq!(after.states.len(), 3);
    assert!(after.output().approx_eq(&after.states[2], 0.0));
}

#[test]
fn preview_matches_prefix_of_snapshot() {
    let toolbox = Toolbox::standard();
    let circuit = parse_circuit("H | @, R(t) | Z, H(t)", 2, &toolbox).unwrap();
    let mut sim = Simulation::new(circuit, toolbox, PhaseClock::default());
    sim.set_phase(1.7);
    let snapshot = sim.snapshot().unwrap();
    for k in 0..=3 {
        assert!(sim.preview(k).unwrap().approx_eq(&snapshot.states[k], 1e-12));
    }
}
