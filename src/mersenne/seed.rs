use alloc::vec;
use alloc::vec::Vec;

use num::bigint::{BigInt, BigUint};
use num::Num;

use super::Error;

/// Conversion of an integer seed into the key words fed to the MT19937 key schedule
///
/// The key is the absolute value of the seed split into 32-bit words,
/// least significant word first. Zero becomes the single word `[0]`.
pub trait IntoSeedWords {
    fn into_seed_words(self) -> Vec<u32>;
}

/// Split an unsigned value into little-endian 32-bit words
fn expand_u128(mut value: u128) -> Vec<u32> {
    if value == 0 {
        return vec![0];
    }

    let mut words = Vec::with_capacity(4);
    while value != 0 {
        words.push(value as u32);
        value >>= 32;
    }
    words
}

/// Expand an arbitrary-precision seed into its key words
pub fn expand_seed(seed: &BigUint) -> Vec<u32> {
    let words = seed.to_u32_digits();
    if words.is_empty() {
        vec![0]
    } else {
        words
    }
}

/// Parse a hex-encoded seed, with or without a `0x` prefix
pub fn from_hex(hex: &str) -> Result<BigUint, Error> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::ParseHex);
    }

    BigUint::from_str_radix(digits, 16).map_err(|_| Error::ParseHex)
}

macro_rules! unsigned_seed {
    ($($ty:ty),*) => {
        $(
            impl IntoSeedWords for $ty {
                fn into_seed_words(self) -> Vec<u32> {
                    expand_u128(self as u128)
                }
            }
        )*
    };
}

macro_rules! signed_seed {
    ($($ty:ty),*) => {
        $(
            impl IntoSeedWords for $ty {
                fn into_seed_words(self) -> Vec<u32> {
                    expand_u128(self.unsigned_abs() as u128)
                }
            }
        )*
    };
}

unsigned_seed!(u8, u16, u32, u64, u128, usize);
signed_seed!(i8, i16, i32, i64, i128, isize);

impl IntoSeedWords for &BigUint {
    fn into_seed_words(self) -> Vec<u32> {
        expand_seed(self)
    }
}

impl IntoSeedWords for BigUint {
    fn into_seed_words(self) -> Vec<u32> {
        expand_seed(&self)
    }
}

impl IntoSeedWords for &BigInt {
    fn into_seed_words(self) -> Vec<u32> {
        expand_seed(self.magnitude())
    }
}

impl IntoSeedWords for BigInt {
    fn into_seed_words(self) -> Vec<u32> {
        expand_seed(self.magnitude())
    }
}
