use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sweep::PhaseSample;

/// One row per phase: the wire probabilities, then `conditional,total` for
/// every peek in circuit order. Undefined conditionals are written as `NaN`.
pub fn write_sweep_csv(path: &Path, samples: &[PhaseSample], num_wires: usize) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);

    let mut header = vec!["phase".to_string()];
    header.extend((0..num_wires).map(|k| format!("p{}", k)));
    if let Some(first) = samples.first() {
        for peek in &first.peeks {
            header.push(format!("peek{}_{}_cond", peek.slice, peek.wire));
            header.push(format!("peek{}_{}_total", peek.slice, peek.wire));
        }
    }
    writeln!(f, "{}", header.join(","))?;

    for sample in samples {
        let mut row = vec![format!("{}", sample.phase)];
        row.extend(sample.wire_probabilities.iter().map(|p| format!("{}", p)));
        for peek in &sample.peeks {
            row.push(format!("{}", peek.stats.conditional));
            row.push(format!("{}", peek.stats.total));
        }
        writeln!(f, "{}", row.join(","))?;
    }
    f.flush()
}
