// ===========================================================================
// Prime factorization (trial division) and Euler's totient
// ===========================================================================

use crate::bigint::{add, divide, mul, sub, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

/// Distinct prime divisors of `m`, ascending, found by trial division:
/// all factors of 2 first, then odd candidates `3, 5, 7, ...` while
/// `d*d <= remaining`; whatever remains above 1 afterward is itself prime.
///
/// Not part of spec.md's external interface directly, but it is how the
/// reference implementation builds `euler_totient` internally
/// (`prime_factorization` in `modular_arithmetic.py`), and nothing in the
/// non-goals excludes exposing it on its own.
pub fn prime_factors(m: &BigInt) -> Result<Vec<BigInt>, NumberError> {
    let zero = BigInt::zero();
    let two = BigInt::from_u64(2);

    let mut factors = Vec::new();
    let mut remaining = m.abs();

    let (_, rem2) = divide(&remaining, &two, RADIX)?;
    if rem2 == zero {
        factors.push(two.clone());
        while {
            let (q, r) = divide(&remaining, &two, RADIX)?;
            if r == zero {
                remaining = q;
                true
            } else {
                false
            }
        } {}
    }

    let mut d = BigInt::from_u64(3);
    loop {
        let d_squared = mul(&d, &d, RADIX)?;
        if d_squared > remaining {
            break;
        }
        let (_, r) = divide(&remaining, &d, RADIX)?;
        if r == zero {
            factors.push(d.clone());
            while {
                let (q, r) = divide(&remaining, &d, RADIX)?;
                if r == zero {
                    remaining = q;
                    true
                } else {
                    false
                }
            } {}
        } else {
            d = add(&d, &two, RADIX)?;
        }
    }

    if remaining > BigInt::one() {
        factors.push(remaining);
    }

    factors.sort();
    Ok(factors)
}

/// Euler's totient `phi(m)`, via `phi(m) = m * prod((p_i - 1) / p_i)` over
/// the distinct prime divisors of `m`, interleaving multiply/divide to stay
/// in integers at every step (spec §4.11).
pub fn euler_totient(m: &BigInt) -> Result<BigInt, NumberError> {
    if *m == BigInt::one() {
        return Ok(BigInt::one());
    }

    let factors = prime_factors(m)?;
    let mut result = m.clone();
    for p in &factors {
        let p_minus_1 = sub(p, &BigInt::one(), RADIX)?;
        result = mul(&result, &p_minus_1, RADIX)?;
        let (q, _) = divide(&result, p, RADIX)?;
        result = q;
    }
    Ok(result)
}
