use num::bigint::BigUint;
use rand::{Error, RngCore, SeedableRng};

use super::random::Random;

// Size of MT19937 output in bytes
const BLOCK_LEN: usize = 4;

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    /// Same bits as `getrandbits(64)`: the first word is the low half
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_word() as u64;
        let hi = self.next_word() as u64;

        (hi << 32) | lo
    }

    /// Fill with little-endian output words, truncating the final word
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for block in dest.chunks_mut(BLOCK_LEN) {
            let word = self.next_word().to_le_bytes();
            block.copy_from_slice(&word[..block.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Random {
    /// Little-endian unsigned integer seed
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(BigUint::from_bytes_le(&seed))
    }

    /// Seed with the integer value, as `Random::new(state)` does
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
