use quantum::{GateId, GateSlot, OperationSlice, Toolbox};
use rng::CircuitRng;

/// A circuit of `depth` slices with slots drawn from `toolbox` and the
/// sentinels. Roughly half the slots are empty.
pub fn random_circuit(
    num_wires: usize,
    depth: usize,
    toolbox: &Toolbox,
    rng: &mut CircuitRng,
) -> Vec<OperationSlice> {
    let ids: Vec<GateId> = toolbox.iter().map(|(id, _)| id).collect();
    (0..depth)
        .map(|_| {
            let slots = (0..num_wires).map(|_| random_slot(&ids, rng)).collect();
            OperationSlice::from_slots(slots)
        })
        .collect()
}

fn random_slot(ids: &[GateId], rng: &mut CircuitRng) -> GateSlot {
    let x = rng.next_f64();
    if x < 0.5 {
        GateSlot::Empty
    } else if x < 0.85 {
        rng.choose(ids).copied().map_or(GateSlot::Empty, GateSlot::Unitary)
    } else if x < 0.92 {
        GateSlot::Control
    } else if x < 0.96 {
        GateSlot::AntiControl
    } else {
        GateSlot::Peek
    }
}
