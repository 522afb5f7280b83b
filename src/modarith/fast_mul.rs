// ===========================================================================
// Fast modular multiplication for moduli of the shape 2^n +/- c
// ===========================================================================

use crate::bigint::{add, divide, mul, sub, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

/// Computes `(a*b) mod p` where `p = 2^n + c` (`sign = '+'`) or
/// `p = 2^n - c` (`sign = '-'`), exploiting `2^n ≡ -c (mod p)` (resp. `+c`)
/// to avoid a full-width reduction. Returns `(result, p)`.
///
/// This is a single reduction pass (spec §4.7): for adversarial `c`/`A`
/// combinations the intermediate value can still land outside `[0, p)`
/// before the final `mod p`, which this routine always applies — so the
/// returned result is correct even though the fast path alone wouldn't be.
pub fn fast_mod_mul(
    a: &BigInt,
    b: &BigInt,
    n: &BigInt,
    c: &BigInt,
    sign: char,
) -> Result<(BigInt, BigInt), NumberError> {
    if sign != '+' && sign != '-' {
        return Err(NumberError::InvalidArgument(format!(
            "fast_mod_mul sign must be '+' or '-', got '{sign}'"
        )));
    }

    let two = BigInt::from_u64(2);
    let two_n = power_integer(&two, n)?;
    let p = if sign == '+' {
        add(&two_n, c, RADIX)?
    } else {
        sub(&two_n, c, RADIX)?
    };

    let product = mul(a, b, RADIX)?;
    let (a_part, b_part) = divide(&product, &two_n, RADIX)?;
    let c_times_a = mul(c, &a_part, RADIX)?;

    let reduced = if sign == '+' {
        if b_part >= c_times_a {
            sub(&b_part, &c_times_a, RADIX)?
        } else {
            let diff = sub(&c_times_a, &b_part, RADIX)?;
            let (_, diff_mod_p) = divide(&diff, &p, RADIX)?;
            if diff_mod_p.is_zero() {
                BigInt::zero()
            } else {
                sub(&p, &diff_mod_p, RADIX)?
            }
        }
    } else {
        add(&b_part, &c_times_a, RADIX)?
    };

    let (_, result) = divide(&reduced, &p, RADIX)?;
    Ok((result, p))
}

/// `base^exp` for a non-negative exponent, via right-to-left binary
/// exponentiation with no modular reduction (used only to build `2^n`).
fn power_integer(base: &BigInt, exp: &BigInt) -> Result<BigInt, NumberError> {
    let one = BigInt::one();
    let two = BigInt::from_u64(2);

    let mut result = BigInt::one();
    let mut base = base.clone();
    let mut exp = exp.clone();

    while exp >= one {
        let (_, remainder) = divide(&exp, &two, RADIX)?;
        if remainder == one {
            result = mul(&result, &base, RADIX)?;
        }
        let (e, _) = divide(&exp, &two, RADIX)?;
        exp = e;
        base = mul(&base, &base, RADIX)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn fast_mod_mul_seed_scenarios() {
        let (result, p) = fast_mod_mul(&n("5"), &n("6"), &n("4"), &n("3"), '+').unwrap();
        assert_eq!((result, p), (n("11"), n("19")));

        let (result, p) = fast_mod_mul(&n("7"), &n("8"), &n("5"), &n("3"), '-').unwrap();
        assert_eq!((result, p), (n("27"), n("29")));
    }

    #[test]
    fn fast_mod_mul_matches_naive_reduction() {
        // Reference check: (a*b) mod p computed the direct way.
        for (a, b, bit, c, sign) in [
            (11u64, 13u64, 5u64, 1u64, '+'),
            (20, 30, 6, 5, '-'),
            (9, 9, 4, 1, '+'),
        ] {
            let (result, p) =
                fast_mod_mul(&n(&a.to_string()), &n(&b.to_string()), &n(&bit.to_string()), &n(&c.to_string()), sign)
                    .unwrap();
            let p_val: u64 = if sign == '+' { (1 << bit) + c } else { (1 << bit) - c };
            assert_eq!(p.format(10).unwrap(), p_val.to_string());
            assert_eq!(result.format(10).unwrap(), ((a * b) % p_val).to_string());
        }
    }

    #[test]
    fn fast_mod_mul_rejects_bad_sign() {
        assert!(fast_mod_mul(&n("1"), &n("1"), &n("2"), &n("1"), '*').is_err());
    }
}
