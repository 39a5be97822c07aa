//! Injectable randomness for cosmetic placement (jitter, initial angle).
//! Physics never reads it, so a seeded or constant source makes worlds
//! fully reproducible in tests.

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform in [0, 1)
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        // xorshift is stuck at zero forever
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }
}

/// Always yields the same value; pins angle and jitter in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantRandom(pub u32);

impl RandomSource for ConstantRandom {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}
