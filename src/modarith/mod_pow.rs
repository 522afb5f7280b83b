// ===========================================================================
// Modular exponentiation
// ===========================================================================

use crate::bigint::{divide, mul, sub, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

/// Right-to-left binary exponentiation: `base^exp mod m`.
///
/// Requires `m >= 1`. `m == 1` trivially reduces everything to `0`, matching
/// the reference implementation (it never special-cases `m == 1`, the
/// division loop does the job on its own).
pub fn mod_pow(base: &BigInt, exp: &BigInt, m: &BigInt) -> Result<BigInt, NumberError> {
    let one = BigInt::one();
    let two = BigInt::from_u64(2);

    let mut result = BigInt::one();
    let (_, mut base) = divide(base, m, RADIX)?;
    let mut exp = exp.clone();

    while exp >= one {
        let (_, remainder) = divide(&exp, &two, RADIX)?;
        if remainder == one {
            result = mul(&result, &base, RADIX)?;
            let (_, r) = divide(&result, m, RADIX)?;
            result = r;
        }
        let (e, _) = divide(&exp, &two, RADIX)?;
        exp = e;
        base = mul(&base, &base, RADIX)?;
        let (_, b) = divide(&base, m, RADIX)?;
        base = b;
    }

    Ok(result)
}

/// `a^(m-2) mod m`, i.e. the modular inverse via Fermat's little theorem.
///
/// Requires `m` to be **prime** — this is not a general-purpose inverse
/// (spec §4.8/§9). Callers working with merely pairwise-coprime moduli need
/// an extended-Euclidean inverse instead; see the open question recorded
/// in DESIGN.md.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt, NumberError> {
    let two = BigInt::from_u64(2);
    let exponent = sub(m, &two, RADIX)?;
    mod_pow(a, &exponent, m)
}
