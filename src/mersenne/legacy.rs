//! Samplers matching the CPython 2 `random` module
//!
//! Python 2 derives the bit count of `_randbelow` from a floating point logarithm, and
//! builds `randrange` on `random()` for ranges narrower than 2**53. Both give different
//! values than the exact integer samplers on `Random`.

use num::bigint::BigUint;
use num::ToPrimitive;

use super::random::Random;
use super::Error;

// widths at or above 2**53 cannot be sampled from a double without bias
const MAX_WIDTH: u64 = 1 << 53;

impl Random {
    /// Random integer in [0, n) using Python 2's bit count `int(1.00001 + log2(n - 1))`
    ///
    /// errors: returns Error if `n` is zero
    pub fn randbelow_legacy(&mut self, n: u64) -> Result<u64, Error> {
        if n == 0 {
            return Err(Error::InvalidArgument("upper bound must be positive"));
        }

        // log(0) is -inf, which saturates to zero bits
        let k = (1.00001 + libm::log((n - 1) as f64) / libm::log(2.0)) as usize;
        let bound = BigUint::from(n);

        loop {
            let r = self.bits(k);
            if r < bound {
                if let Some(v) = r.to_u64() {
                    return Ok(v);
                }
            }
        }
    }

    /// Random integer in [start, stop) the way Python 2 computes it
    ///
    /// errors: returns Error if `start >= stop`
    pub fn randrange_legacy(&mut self, start: i64, stop: i64) -> Result<i64, Error> {
        if start >= stop {
            return Err(Error::InvalidArgument("empty range for randrange"));
        }

        let width = (stop as i128 - start as i128) as u64;
        let offset = if width >= MAX_WIDTH {
            self.randbelow_legacy(width)?
        } else {
            (self.random() * width as f64) as u64
        };

        Ok((start as i128 + offset as i128) as i64)
    }

    /// Random integer in [a, b] the way Python 2 computes it
    ///
    /// errors: returns Error if `a > b`
    pub fn randint_legacy(&mut self, a: i64, b: i64) -> Result<i64, Error> {
        let stop = b
            .checked_add(1)
            .ok_or(Error::InvalidArgument("upper bound of randint out of range"))?;

        self.randrange_legacy(a, stop)
            .map_err(|_| Error::InvalidArgument("empty range for randint"))
    }

    /// Pick an element with Python 2's `seq[int(random() * len(seq))]`
    pub fn choice_legacy<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let idx = (self.random() * items.len() as f64) as usize;
        items.get(idx)
    }
}
