#![no_std]

//! Mersenne Twister PRNG reproducing the output of CPython's `random` module
//! for a given integer seed.

extern crate alloc;

pub mod mersenne;
