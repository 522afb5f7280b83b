// ===========================================================================
// Fermat primality test
// ===========================================================================

use crate::bigint::{divide, sub, BigInt};
use crate::error::NumberError;
use crate::modarith::mod_pow;
use crate::rng::gen_bigint_range;
use rand_core::RngCore;

const RADIX: u32 = 10;

/// Runs `k` rounds of Fermat's test on `p`. Each round draws a random
/// witness `b` in `[2, p-2]` and rejects if `b^(p-1) mod p != 1`.
///
/// Degenerate candidates (`p < 4`) are reported as probably prime without
/// drawing a witness, matching spec §4.15's `p < 4` carve-out — there is no
/// witness range to sample from below that.
pub fn fermat(p: &BigInt, k: u32, rng: &mut dyn RngCore) -> Result<bool, NumberError> {
    let one = BigInt::one();
    let two = BigInt::from_u64(2);
    let four = BigInt::from_u64(4);

    if *p < four {
        return Ok(true);
    }

    let p_minus_1 = sub(p, &one, RADIX)?;
    let p_minus_2 = sub(p, &two, RADIX)?;

    for _ in 0..k {
        let b = gen_bigint_range(rng, &two, &p_minus_2)?;
        let (_, check) = divide(&mod_pow(&b, &p_minus_1, p)?, p, RADIX)?;
        if check != one {
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
    fn fermat_accepts_small_primes() {
        let mut rng = seeded(1);
        for p in [7u64, 11, 13, 97, 101] {
            assert!(fermat(&n(&p.to_string()), 15, &mut rng).unwrap());
        }
    }

    #[test]
    fn fermat_rejects_a_composite() {
        let mut rng = seeded(2);
        // 341 = 11*31, the smallest Fermat pseudoprime base 2; with 40
        // random witnesses across [2, 339] a non-base-2 witness almost
        // certainly exposes it.
        assert!(!fermat(&n("341"), 40, &mut rng).unwrap());
    }

    #[test]
    fn fermat_degenerate_small_inputs() {
        let mut rng = seeded(3);
        for p in [0u64, 1, 2, 3] {
            assert!(fermat(&n(&p.to_string()), 5, &mut rng).unwrap());
        }
    }
}
