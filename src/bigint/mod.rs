mod arithmetic;
mod core;
mod gcd;

pub use arithmetic::{add, divide, mul, sub};
pub use core::BigInt;
pub use gcd::{extended_gcd, gcd};
