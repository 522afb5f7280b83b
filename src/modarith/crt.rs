// ===========================================================================
// Chinese Remainder Theorem
// ===========================================================================

use super::mod_pow::mod_inverse;
use crate::bigint::{add, divide, mul, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

/// Combines a system of congruences `{(a_i, n_i)}` into `(x, N)` with
/// `N = prod(n_i)` and `x = sum(a_i * N_i * y_i) mod N`, where
/// `N_i = N / n_i` and `y_i = mod_inverse(N_i, n_i)`.
///
/// Each `n_i` must be **prime**: `mod_inverse` is Fermat-style and requires
/// a prime modulus (spec §4.8's precondition propagates here — see the
/// open question in DESIGN.md). Moduli that are merely pairwise coprime but
/// not prime will produce a wrong `y_i` silently.
pub fn crt(congruences: &[(BigInt, BigInt)]) -> Result<(BigInt, BigInt), NumberError> {
    let modulus_product = congruences
        .iter()
        .try_fold(BigInt::one(), |acc, (_, n_i)| mul(&acc, n_i, RADIX))?;

    let mut total = BigInt::zero();
    for (a_i, n_i) in congruences {
        let (n_sub_i, _) = divide(&modulus_product, n_i, RADIX)?;
        let y_i = mod_inverse(&n_sub_i, n_i)?;
        let term = mul(&mul(a_i, &n_sub_i, RADIX)?, &y_i, RADIX)?;
        total = add(&total, &term, RADIX)?;
    }

    let (_, x) = divide(&total, &modulus_product, RADIX)?;
    Ok((x, modulus_product))
}
