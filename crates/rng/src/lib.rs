//! Deterministic SHAKE256 stream used to draw random circuits and states.
//!
//! The same seed always yields the same sequence, so randomised tests and
//! sweeps are reproducible across machines.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256, Shake256Reader,
};

pub struct CircuitRng {
    reader: Shake256Reader,
    drawn: u64,
}

impl CircuitRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut h = Shake256::default();
        h.update(b"CIRCUIT_RNG");
        h.update(&(seed.len() as u64).to_be_bytes());
        h.update(seed);
        Self {
            reader: h.finalize_xof(),
            drawn: 0,
        }
    }

    /// Number of 64-bit words consumed so far.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut out = [0u8; 8];
        self.reader.read(&mut out);
        self.drawn += 1;
        u64::from_be_bytes(out)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[lo, hi)`.
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform integer in `0..n`.
    ///
    /// *Panics if `n == 0`.*
    pub fn next_below(&mut self, n: usize) -> usize {
        assert!(n > 0, "next_below: empty range");
        // rejection sampling keeps the draw unbiased
        let n = n as u64;
        let zone = u64::MAX - u64::MAX % n;
        loop {
            let v = self.next_u64();
            if v < zone {
                return (v % n) as usize;
            }
        }
    }

    /// Rotation axis with each component uniform in `[-max, max)`.
    pub fn next_axis(&mut self, max: f64) -> (f64, f64, f64) {
        (
            self.next_range(-max, max),
            self.next_range(-max, max),
            self.next_range(-max, max),
        )
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.next_below(items.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = CircuitRng::new(b"seed");
        let mut b = CircuitRng::new(b"seed");
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_eq!(a.drawn(), 16);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = CircuitRng::new(b"seed-a");
        let mut b = CircuitRng::new(b"seed-b");
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn ranges_are_respected() {
        let mut rng = CircuitRng::new(b"ranges");
        for _ in 0..1000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
            assert!(rng.next_below(5) < 5);
            let r = rng.next_range(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&r));
        }
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
