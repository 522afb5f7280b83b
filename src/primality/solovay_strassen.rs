// ===========================================================================
// Solovay-Strassen primality test
// ===========================================================================

use crate::bigint::{divide, sub, BigInt};
use crate::error::NumberError;
use crate::modarith::{legendre, mod_pow};
use crate::rng::gen_bigint_range;
use rand_core::RngCore;

const RADIX: u32 = 10;

/// Runs `k` rounds of the Solovay-Strassen test on `p`. Each round draws a
/// witness `b` in `[2, p-1]`, computes `r = b^((p-1)/2) mod p` and the
/// Legendre symbol `s = (b/p)` (mapped to `p-1` when `s == -1`), and
/// rejects unless `r` is `1` or `p-1` **and** `r` equals that mapped `s`.
pub fn solovay_strassen(p: &BigInt, k: u32, rng: &mut dyn RngCore) -> Result<bool, NumberError> {
    let one = BigInt::one();
    let two = BigInt::from_u64(2);
    let four = BigInt::from_u64(4);

    if *p < four {
        return Ok(true);
    }

    let p_minus_1 = sub(p, &one, RADIX)?;
    let (exponent, _) = divide(&p_minus_1, &two, RADIX)?;

    for _ in 0..k {
        let b = gen_bigint_range(rng, &two, &p_minus_1)?;
        let r = mod_pow(&b, &exponent, p)?;

        if r != one && r != p_minus_1 {
            return Ok(false);
        }

        let s = legendre(&b, p)?;
        let s_as_element = if s == 1 { one.clone() } else { p_minus_1.clone() };
        if r != s_as_element {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::test_support::seeded;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn solovay_strassen_seed_scenarios() {
        let mut rng = seeded(10);
        assert!(solovay_strassen(&n("7"), 20, &mut rng).unwrap());
        assert!(!solovay_strassen(&n("25"), 20, &mut rng).unwrap());
    }

    #[test]
    fn solovay_strassen_accepts_several_primes() {
        let mut rng = seeded(11);
        for p in [11u64, 13, 17, 97, 113] {
            assert!(solovay_strassen(&n(&p.to_string()), 20, &mut rng).unwrap());
        }
    }
}
