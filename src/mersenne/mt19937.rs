/// Implementation of Mersenne Twister MT19937 with the init_by_array key schedule from
/// Matsumoto and Nishimura's 2002 reference code, as used by CPython's `random` module:
///
/// http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/MT2002/emt19937ar.html
/// https://en.wikipedia.org/wiki/Mersenne_Twister

pub const W: u32 = 32;
pub const N: usize = 624;
pub const M: usize = 397;

#[allow(dead_code)]
pub const R: u32 = 31;

pub const A: u32 = 0x9908_b0df;

pub const U: u32 = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: u32 = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: u32 = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: u32 = 18;

pub const F: u32 = 1812433253;

/// Scalar seed used to bootstrap the state before the key is mixed in
pub const INIT_SEED: u32 = 19650218;

/// Multiplier of the key-mixing pass
pub const KEY_MULT: u32 = 1664525;

/// Multiplier of the final (keyless) mixing pass
pub const FINAL_MULT: u32 = 1566083941;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// MT19937 PRNG (32-bit)
#[derive(Clone)]
pub struct Mt19937 {
    pub(crate) state: [u32; N],
    pub(crate) index: usize,
}

impl Mt19937 {
    /// Create an MT19937 PRNG keyed by a sequence of 32-bit words
    ///
    /// An empty key is treated as the single word zero
    pub fn new(key: &[u32]) -> Self {
        if key.is_empty() {
            Self::init_by_array(&[0])
        } else {
            Self::init_by_array(key)
        }
    }

    /// Initialize the state from a single 32-bit seed
    ///
    /// The index is left at N, so the first extraction twists the whole state
    pub fn init_genrand(seed: u32) -> Self {
        let mut state = [0_u32; N];
        state[0] = seed;

        for i in 1..N {
            Self::k_distribute(&mut state, i);
        }

        Self { state, index: N }
    }

    /// Initialize the state from a key of one or more 32-bit words
    ///
    /// Callers must pass a non-empty key
    pub(crate) fn init_by_array(key: &[u32]) -> Self {
        let mut rng = Self::init_genrand(INIT_SEED);
        let state = &mut rng.state;

        let mut i = 1;
        let mut j = 0;

        for _k in 0..N.max(key.len()) {
            // non-linear mix of the previous slot and the next key word
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = (state[i] ^ prev.wrapping_mul(KEY_MULT))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);

            i += 1;
            j += 1;

            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _k in 0..N - 1 {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = (state[i] ^ prev.wrapping_mul(FINAL_MULT)).wrapping_sub(i as u32);

            i += 1;

            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }

        // MSB is 1, the state can never be all zeros
        state[0] = UPPER_MASK;

        rng
    }

    /// Perform k-distribution step to generate initial state from seed value
    pub(crate) fn k_distribute(state: &mut [u32; N], i: usize) {
        // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
        state[i] = (F as u64 * (state[i - 1] ^ (state[i - 1] >> (W - 2))) as u64 + i as u64
            & 0xffff_ffff) as u32;
    }

    /// Extract a tempered value based on MT[index]
    /// regenerating the whole state every N numbers
    pub fn extract_number(&mut self) -> u32 {
        if self.index >= N {
            for i in 0..N {
                Self::twist(&mut self.state, i);
            }
            self.index = 0;
        }

        let mut z = self.state[self.index] ^ ((self.state[self.index] >> U) & D);

        self.index += 1;

        z ^= (z << S) & B;
        z ^= (z << T) & C;

        z ^ (z >> L)
    }

    /// Perform the Twist on a given state at a given index
    ///
    /// Slots past N - M read the already twisted values from the front of the state,
    /// so the slots must be twisted in ascending order
    pub(crate) fn twist(state: &mut [u32; N], index: usize) {
        let j = (index + 1) % N;
        let y = (state[index] & UPPER_MASK) | (state[j] & LOWER_MASK);
        let k = (index + M) % N;

        state[index] = state[k] ^ (y >> 1) ^ (A * (y & 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_init_genrand() {
        // first outputs of the reference mt19937ar.c seeded with init_genrand(5489)
        let mut rng = Mt19937::init_genrand(5489);

        assert_eq!(rng.index, N);
        assert_eq!(rng.extract_number(), 3499211612);
        assert_eq!(rng.extract_number(), 581869302);
        assert_eq!(rng.extract_number(), 3890346734);
        assert_eq!(rng.index, 3);
    }

    #[test]
    fn check_init_by_array() {
        // first outputs of the reference mt19937ar.c main() key
        let mut rng = Mt19937::new(&[0x123, 0x234, 0x345, 0x456]);

        assert_eq!(rng.extract_number(), 1067595299);
        assert_eq!(rng.extract_number(), 955945823);
        assert_eq!(rng.extract_number(), 477289528);
    }

    #[test]
    fn check_empty_key() {
        let mut empty = Mt19937::new(&[]);
        let mut zero = Mt19937::new(&[0]);

        for _i in 0..N + 1 {
            assert_eq!(empty.extract_number(), zero.extract_number());
        }
    }

    #[test]
    fn check_nonzero_state() {
        let rng = Mt19937::new(&[0]);

        assert_eq!(rng.state[0], UPPER_MASK);
        assert_eq!(rng.index, N);
    }

    #[test]
    fn check_twist_cycle() {
        let mut rng = Mt19937::new(&[42]);

        for _i in 0..N {
            let _ = rng.extract_number();
        }
        assert_eq!(rng.index, N);

        let _ = rng.extract_number();
        assert_eq!(rng.index, 1);
    }

    #[test]
    fn check_key_longer_than_state() {
        let key: [u32; N + 10] = [0xdead_beef; N + 10];
        let mut a = Mt19937::new(&key);
        let mut b = Mt19937::new(&key[..N]);

        // the extra key words take part in the mix
        for _i in 0..4 {
            if a.extract_number() != b.extract_number() {
                return;
            }
        }
        panic!("key words past N were ignored");
    }
}
