pub mod legacy;
pub mod mt19937;
pub mod random;
pub mod rng;
pub mod seed;

pub use random::Random;
pub use seed::IntoSeedWords;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// A precondition on a sampling argument was violated
    InvalidArgument(&'static str),
    ParseHex,
}
