use std::hash::{BuildHasher, Hasher};

const MULTIPLIER: u64 = 5;

/// The default [`BuildHasher`] for the dictionaries in this module, producing [`RollingHasher`]s.
///
/// Hashes are fully deterministic, which makes slot placement predictable: an integer key on its
/// own hashes to its own value, so `n` lands in slot `n % cap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollingState;

impl BuildHasher for RollingState {
    type Hasher = RollingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        RollingHasher::default()
    }
}

/// A polynomial rolling hash, starting from 0 and computing `state * 5 + x` for each value
/// written.
///
/// Bytes are folded in one at a time, while integers are folded in as a single value. Integers
/// wider than 64 bits are treated as bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollingHasher {
    state: u64,
}

impl RollingHasher {
    const fn roll(&mut self, value: u64) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(value);
    }
}

impl Hasher for RollingHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.roll(*byte as u64);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.roll(i as u64);
    }

    fn write_u16(&mut self, i: u16) {
        self.roll(i as u64);
    }

    fn write_u32(&mut self, i: u32) {
        self.roll(i as u64);
    }

    fn write_u64(&mut self, i: u64) {
        self.roll(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.roll(i as u64);
    }

    // Signed integers keep their two's complement bit pattern.
    fn write_i8(&mut self, i: i8) {
        self.roll(i as u8 as u64);
    }

    fn write_i16(&mut self, i: i16) {
        self.roll(i as u16 as u64);
    }

    fn write_i32(&mut self, i: i32) {
        self.roll(i as u32 as u64);
    }

    fn write_i64(&mut self, i: i64) {
        self.roll(i as u64);
    }

    fn write_isize(&mut self, i: isize) {
        self.roll(i as usize as u64);
    }
}
