//! Mulberry32 generator
//!
//! Small-state 32-bit mixing generator. The constants and mixing steps match the
//! widely published public-domain version, so a given seed yields the same daily
//! puzzle as any other implementation of the game sharing that seed.

/// Scale factor mapping a `u32` onto [0, 1)
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seeded pseudo-random stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator for a seed
    ///
    /// Any integer is accepted: the seed is reduced modulo 2^32, two's complement for
    /// negatives.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    /// Next raw 32-bit output
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform index in `0..bound`, derived as `floor(next_f64() * bound)`
    ///
    /// # Panics
    /// Panics in debug mode if `bound` is zero
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be positive");
        (self.next_f64() * bound as f64) as usize
    }
}
