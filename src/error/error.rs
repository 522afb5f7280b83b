// ===========================================================================
// Centralized error handling
//
// Every fallible operation in this crate returns Result<_, NumberError>
// instead of panicking. Callers (a CLI, a GUI, a test) get an Err they can
// report cleanly instead of a crashed process.
// ===========================================================================

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// parse/format called with a radix outside [2, 36]
    InvalidRadix(u32),
    /// a character in the input maps to no digit at all (not `0-9A-Za-z`)
    InvalidChar(char),
    /// a character maps to a digit value that is out of range for the radix
    DigitOutOfRange { digit: u32, radix: u32 },
    /// the input was just a bare sign with no digits after it
    EmptyAfterSign,
    /// division or modular reduction by zero
    DivisionByZero,
    /// a precondition on an argument was violated (even modulus passed to
    /// jacobi, target bit-length < 17 passed to the GOST generator, h > k
    /// in Pocklington generation, a trial-division candidate above 10^18)
    InvalidArgument(String),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::InvalidRadix(r) =>
                write!(f, "radix {r} is out of range, expected 2..=36"),
            NumberError::InvalidChar(c) =>
                write!(f, "character '{c}' is not a valid digit"),
            NumberError::DigitOutOfRange { digit, radix } =>
                write!(f, "digit {digit} is out of range for radix {radix}"),
            NumberError::EmptyAfterSign =>
                write!(f, "no digits found after the sign"),
            NumberError::DivisionByZero =>
                write!(f, "division by zero"),
            NumberError::InvalidArgument(msg) =>
                write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for NumberError {}
