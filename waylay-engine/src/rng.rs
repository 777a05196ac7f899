//! Deterministic pseudo-random stream keyed by an arbitrary string.
//!
//! Not cryptographic and not meant to be: the contract is only that
//! identical seed strings replay identical streams, so trigger rolls and
//! encounter draws can be reproduced for debugging.

/// Mulberry32 increment applied on every draw.
const STATE_INCREMENT: u32 = 0x6d2b_79f5;

/// Seeded, non-cryptographic random stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededPrng {
    state: u32,
}

impl SeededPrng {
    /// Derive the initial state from a seed string.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self {
            state: hash_seed(seed),
        }
    }

    /// Next value in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Integer roll in [1, 100].
    pub fn roll_percent(&mut self) -> u32 {
        let scaled = (self.next() * 100.0).floor();
        // next() < 1.0 keeps the floor at or below 99
        scaled as u32 + 1
    }
}

/// 32-bit polynomial hash over the seed's UTF-16 code units:
/// `hash = (hash << 5) - hash + unit`, wrapping at i32. A zero hash
/// substitutes 1 so the stream never starts from the degenerate state.
fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    if hash == 0 { 1 } else { hash as u32 }
}
