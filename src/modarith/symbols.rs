// ===========================================================================
// Legendre and Jacobi symbols
// ===========================================================================

use super::mod_pow::mod_pow;
use crate::bigint::{divide, sub, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

/// Legendre symbol `(a/p)` for an odd prime `p`, via Euler's criterion:
/// `0` if `p | a`; otherwise `a^((p-1)/2) mod p`, which is `1` or `p-1`
/// (mapped to `-1`).
pub fn legendre(a: &BigInt, p: &BigInt) -> Result<i32, NumberError> {
    let zero = BigInt::zero();
    let one = BigInt::one();
    let two = BigInt::from_u64(2);

    let (_, rem) = divide(a, p, RADIX)?;
    if rem == zero {
        return Ok(0);
    }

    let p_minus_1 = sub(p, &one, RADIX)?;
    let (exponent, _) = divide(&p_minus_1, &two, RADIX)?;
    let result = mod_pow(a, &exponent, p)?;

    Ok(if result == one { 1 } else { -1 })
}

/// Jacobi symbol `(a/n)` for odd `n >= 1`, via the quadratic-reciprocity
/// recursion (spec §4.13). Even or non-positive `n` is `InvalidArgument`.
pub fn jacobi(a: &BigInt, n: &BigInt) -> Result<i32, NumberError> {
    let zero = BigInt::zero();
    let one = BigInt::one();
    let two = BigInt::from_u64(2);
    let four = BigInt::from_u64(4);
    let eight = BigInt::from_u64(8);

    let (_, n_rem_2) = divide(n, &two, RADIX)?;
    if *n < one || n_rem_2 == zero {
        return Err(NumberError::InvalidArgument(
            "jacobi symbol requires an odd, positive n".to_string(),
        ));
    }

    let (_, mut a) = divide(a, n, RADIX)?;
    let mut n = n.clone();
    let mut t: i32 = 1;

    while a != zero {
        loop {
            let (_, a_rem_2) = divide(&a, &two, RADIX)?;
            if a_rem_2 != zero {
                break;
            }
            let (half, _) = divide(&a, &two, RADIX)?;
            a = half;

            let (_, n_rem_8) = divide(&n, &eight, RADIX)?;
            let n_mod_8 = n_rem_8.format(10)?;
            if n_mod_8 == "3" || n_mod_8 == "5" {
                t = -t;
            }
        }

        std::mem::swap(&mut a, &mut n);

        let (_, a_rem_4) = divide(&a, &four, RADIX)?;
        let (_, n_rem_4) = divide(&n, &four, RADIX)?;
        if a_rem_4 == BigInt::from_u64(3) && n_rem_4 == BigInt::from_u64(3) {
            t = -t;
        }

        let (_, reduced) = divide(&a, &n, RADIX)?;
        a = reduced;
    }

    Ok(if n == one { t } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn legendre_seed_scenarios() {
        assert_eq!(legendre(&n("2"), &n("7")).unwrap(), 1);
        assert_eq!(legendre(&n("3"), &n("7")).unwrap(), -1);
        assert_eq!(legendre(&n("14"), &n("7")).unwrap(), 0);
    }

    #[test]
    fn legendre_of_square_is_residue() {
        let p = n("13");
        for r in 1..13u64 {
            let square = (r * r) % 13;
            assert_eq!(legendre(&n(&square.to_string()), &p).unwrap(), 1);
        }
    }

    #[test]
    fn jacobi_seed_scenarios() {
        assert_eq!(jacobi(&n("15"), &n("77")).unwrap(), 1);
        assert_eq!(jacobi(&n("21"), &n("77")).unwrap(), 0);
        assert_eq!(jacobi(&n("5"), &n("10")), Err(NumberError::InvalidArgument(
            "jacobi symbol requires an odd, positive n".to_string(),
        )));
    }

    #[test]
    fn jacobi_is_multiplicative() {
        let modulus = n("21");
        let (a, b) = (n("4"), n("5"));
        let lhs = jacobi(&crate::bigint::mul(&a, &b, RADIX).unwrap(), &modulus).unwrap();
        let rhs = jacobi(&a, &modulus).unwrap() * jacobi(&b, &modulus).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn jacobi_matches_legendre_on_primes() {
        let p = n("13");
        for a in 1..13u64 {
            let a = n(&a.to_string());
            assert_eq!(jacobi(&a, &p).unwrap(), legendre(&a, &p).unwrap());
        }
    }
}
