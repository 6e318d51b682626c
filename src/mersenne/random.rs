use alloc::vec::Vec;
use core::convert::TryInto;

use num::bigint::{BigInt, BigUint, Sign};
use num::{One, ToPrimitive, Zero};

use super::mt19937::Mt19937;
use super::seed::{self, IntoSeedWords};
use super::Error;

// 2**26, scales the 27 high bits of the first word of a double
const TWO_POW_26: f64 = 67108864.0;

// 2**53, the width of an IEEE-754 double mantissa
const TWO_POW_53: f64 = 9007199254740992.0;

/// Python-compatible pseudo-random generator
///
/// Seeded with the same integer, it produces the same values as CPython's `random.Random`
/// for `random()` and `getrandbits()`. Every instance owns its own MT19937 state, and
/// the output sequence depends only on the seed and the order of calls.
///
/// Not suitable for cryptographic use.
#[derive(Clone)]
pub struct Random {
    pub(crate) mt: Mt19937,
}

impl Random {
    /// Create a generator seeded with an integer of any sign and magnitude
    pub fn new<S: IntoSeedWords>(seed: S) -> Self {
        Self::from_words(&seed.into_seed_words())
    }

    /// Create a generator keyed directly by 32-bit words, least significant first
    ///
    /// Unlike integer seeds, trailing zero words are significant here
    pub fn from_words(words: &[u32]) -> Self {
        Self {
            mt: Mt19937::new(words),
        }
    }

    /// Create a generator seeded with a big-endian unsigned integer
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Create a generator seeded with a hex-encoded unsigned integer
    ///
    /// errors: returns Error on empty or non-hex strings
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Ok(Self::new(seed::from_hex(hex)?))
    }

    /// Reseed the generator, replacing its entire state
    pub fn seed<S: IntoSeedWords>(&mut self, seed: S) {
        *self = Self::new(seed);
    }

    /// Next raw (tempered) 32-bit output
    pub fn next_word(&mut self) -> u32 {
        self.mt.extract_number()
    }

    /// Random double in [0.0, 1.0) with 53 bits of precision
    pub fn random(&mut self) -> f64 {
        // 27 bits from the first word, 26 bits from the second
        let a = self.next_word() >> 5;
        let b = self.next_word() >> 6;

        (a as f64 * TWO_POW_26 + b as f64) / TWO_POW_53
    }

    /// Random unsigned integer with `k` bits
    ///
    /// errors: returns Error if `k` is negative (or does not fit a usize)
    pub fn getrandbits<K: TryInto<usize>>(&mut self, k: K) -> Result<BigUint, Error> {
        let k = k
            .try_into()
            .map_err(|_| Error::InvalidArgument("number of bits must be non-negative"))?;

        Ok(self.bits(k))
    }

    /// Draw exactly `k` random bits
    ///
    /// The first word drawn holds the lowest 32 bits. The last word drops its low bits
    /// when `k` is not a multiple of 32.
    pub(crate) fn bits(&mut self, k: usize) -> BigUint {
        if k == 0 {
            return BigUint::zero();
        }

        let len = (k - 1) / 32 + 1;
        let mut words = Vec::with_capacity(len);
        let mut remaining = k;

        for _i in 0..len {
            let word = self.next_word();
            if remaining < 32 {
                words.push(word >> (32 - remaining));
            } else {
                words.push(word);
            }
            remaining = remaining.saturating_sub(32);
        }

        BigUint::new(words)
    }

    /// Unbiased random integer in [0, n), drawn by rejection sampling
    ///
    /// errors: returns Error if `n` is zero or negative
    pub fn randbelow<N: Into<BigInt>>(&mut self, n: N) -> Result<BigInt, Error> {
        let n = n.into();
        if n.sign() != Sign::Plus {
            return Err(Error::InvalidArgument("upper bound must be positive"));
        }

        Ok(BigInt::from(self.below(n.magnitude())))
    }

    // Rejection sampling over the bit length of n - 1, n must be at least one
    pub(crate) fn below(&mut self, n: &BigUint) -> BigUint {
        if n.is_zero() {
            return BigUint::zero();
        }

        let k = (n - BigUint::one()).bits() as usize;
        if k == 0 {
            return BigUint::zero();
        }

        let mut r = self.bits(k);
        while &r >= n {
            r = self.bits(k);
        }
        r
    }

    /// Random integer in [a, b], both ends included
    ///
    /// errors: returns Error if `a > b`
    pub fn randint<A: Into<BigInt>, B: Into<BigInt>>(
        &mut self,
        a: A,
        b: B,
    ) -> Result<BigInt, Error> {
        let a = a.into();
        let b = b.into();
        if a > b {
            return Err(Error::InvalidArgument("empty range for randint"));
        }

        let width = (&b - &a) + BigInt::one();
        let offset = self.below(width.magnitude());

        Ok(a + BigInt::from(offset))
    }

    /// Random integer in [start, stop)
    ///
    /// errors: returns Error if `start >= stop`
    pub fn randrange<A: Into<BigInt>, B: Into<BigInt>>(
        &mut self,
        start: A,
        stop: B,
    ) -> Result<BigInt, Error> {
        let start = start.into();
        let stop = stop.into();
        if start >= stop {
            return Err(Error::InvalidArgument("empty range for randrange"));
        }

        let width = &stop - &start;
        let offset = self.below(width.magnitude());

        Ok(start + BigInt::from(offset))
    }

    /// Pick a uniformly random element, or None for an empty slice
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let idx = self.below(&BigUint::from(items.len())).to_usize()?;

        items.get(idx)
    }
}
