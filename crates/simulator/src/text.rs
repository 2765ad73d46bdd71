//! Plain-text circuit notation used by the command-line tools.
//!
//! Slices are separated by `|` and slots within a slice by `,`, wire 0
//! first. `.` (or nothing) is an empty slot, `@` a control, `o` an
//! anti-control, `?` a peek; any other token is looked up by symbol in the
//! toolbox. Trailing slots may be omitted.
//!
//! ```text
//! H | @, X | ., ?
//! ```

use quantum::{GateSlot, OperationSlice, Toolbox};

use crate::circuit::Circuit;
use crate::error::{Result, SimError};

pub fn parse_circuit(text: &str, num_wires: usize, toolbox: &Toolbox) -> Result<Circuit> {
    if text.trim().is_empty() {
        return Err(SimError::EmptyCircuitText);
    }

    let mut circuit = Circuit::new(num_wires);
    for (index, chunk) in text.split('|').enumerate() {
        let tokens: Vec<&str> = chunk.split(',').map(str::trim).collect();
        if tokens.len() > num_wires {
            return Err(SimError::Parse {
                slice: index,
                wire: tokens.len() - 1,
                reason: format!("only {} wires available", num_wires),
            });
        }

        let mut slice = OperationSlice::empty(num_wires);
        for (wire, token) in tokens.into_iter().enumerate() {
            let slot = parse_slot(token, toolbox).ok_or_else(|| SimError::Parse {
                slice: index,
                wire,
                reason: format!("unknown gate '{}'", token),
            })?;
            slice.set(wire, slot)?;
        }
        circuit.push(slice)?;
    }
    Ok(circuit)
}

fn parse_slot(token: &str, toolbox: &Toolbox) -> Option<GateSlot> {
    match token {
        "" | "." => Some(GateSlot::Empty),
        "@" => Some(GateSlot::Control),
        "o" => Some(GateSlot::AntiControl),
        "?" => Some(GateSlot::Peek),
        symbol => toolbox.find(symbol).map(GateSlot::Unitary),
    }
}

/// Inverse of [`parse_circuit`] for circuits whose gates all come from `toolbox`.
pub fn format_circuit(circuit: &Circuit, toolbox: &Toolbox) -> String {
    circuit
        .slices()
        .iter()
        .map(|slice| {
            slice
                .slots()
                .iter()
                .map(|slot| match slot {
                    GateSlot::Unitary(id) => toolbox
                        .get(*id)
                        .map(|g| g.symbol().to_string())
                        .unwrap_or_else(|_| slot.to_string()),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_pads_slots() {
        let toolbox = Toolbox::standard();
        let circuit = parse_circuit("H | @, X | ., ?", 3, &toolbox).unwrap();
        assert_eq!(circuit.len(), 3);
        let h = toolbox.find("H").unwrap();
        assert_eq!(
            circuit.slices()[0].slots(),
            &[GateSlot::Unitary(h), GateSlot::Empty, GateSlot::Empty]
        );
        assert_eq!(circuit.slices()[2].slot(1), Some(GateSlot::Peek));
    }

    #[test]
    fn round_trips_through_format() {
        let toolbox = Toolbox::standard();
        let text = "H, ., . | @, X, o | ., ., ? | Z^1/4, X(t), R(t)";
        let circuit = parse_circuit(text, 3, &toolbox).unwrap();
        assert_eq!(format_circuit(&circuit, &toolbox), text);
    }

    #[test]
    fn rejects_unknown_symbols_and_extra_wires() {
        let toolbox = Toolbox::standard();
        assert_eq!(
            parse_circuit("H | Q", 2, &toolbox).unwrap_err(),
            SimError::Parse {
                slice: 1,
                wire: 0,
                reason: "unknown gate 'Q'".to_string(),
            }
        );
        assert!(matches!(
            parse_circuit("H, H, H", 2, &toolbox),
            Err(SimError::Parse { slice: 0, .. })
        ));
        assert_eq!(
            parse_circuit("  ", 2, &toolbox).unwrap_err(),
            SimError::EmptyCircuitText
        );
    }
}
