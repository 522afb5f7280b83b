// ===========================================================================
// Pocklington-certified prime generation
// ===========================================================================

use crate::bigint::{add, divide, gcd, mul, sub, BigInt};
use crate::error::NumberError;
use crate::modarith::mod_pow;
use crate::primality::generation::generate_small_primes;
use crate::rng::gen_bigint_range;
use rand::seq::SliceRandom;
use rand_core::RngCore;

const RADIX: u32 = 10;

/// A Pocklington-certified prime together with the evidence that certifies
/// it: the `h` distinct factors of `p - 1` chosen for the witness step, and
/// the full pool of small primes they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocklingtonCertificate {
    pub prime: BigInt,
    pub factors: Vec<BigInt>,
    pub pool: Vec<BigInt>,
}

/// Runs up to `witnesses` Pocklington witness attempts against candidate
/// `p`, whose predecessor `p - 1 = 2 * factors.iter().product()`.
///
/// A witness `b` certifies `p` when both: `b^(p-1) ≡ 1 (mod p)`, and for
/// every factor `m_j`, `gcd(b^((p-1)/m_j) - 1, p) = 1`. A witness failing
/// either check is simply discarded in favor of the next one.
fn pocklington_test(
    rng: &mut dyn RngCore,
    p: &BigInt,
    factors: &[BigInt],
    witnesses: u32,
) -> Result<bool, NumberError> {
    let one = BigInt::one();
    let two = BigInt::from_u64(2);
    let p_minus_1 = sub(p, &one, RADIX)?;
    let p_minus_2 = sub(p, &two, RADIX)?;

    for _ in 0..witnesses {
        let b = gen_bigint_range(rng, &two, &p_minus_2)?;

        if mod_pow(&b, &p_minus_1, p)? != one {
            continue;
        }

        let mut all_factors_pass = true;
        for factor in factors {
            let (exponent, _) = divide(&p_minus_1, factor, RADIX)?;
            let term = mod_pow(&b, &exponent, p)?;
            let term_minus_1 = sub(&term, &one, RADIX)?;
            if gcd(&term_minus_1, p) != one {
                all_factors_pass = false;
                break;
            }
        }

        if all_factors_pass {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Generates a prime `p` with a known factorization of `p - 1`.
///
/// Builds a pool of `small_primes_count` primes of bit-length
/// `small_primes_bits`, then repeatedly samples `h` of them without
/// replacement to form `p = 2 * m_1 * ... * m_h + 1`, retrying with a fresh
/// subset whenever `witnesses` Pocklington attempts all fail.
pub fn generate_with_factorization(
    rng: &mut dyn RngCore,
    small_primes_count: usize,
    small_primes_bits: u64,
    h: usize,
    witnesses: u32,
) -> Result<PocklingtonCertificate, NumberError> {
    if h > small_primes_count {
        return Err(NumberError::InvalidArgument(
            "h cannot exceed the number of small primes generated".to_string(),
        ));
    }

    let pool = generate_small_primes(rng, small_primes_count, small_primes_bits)?;
    let two = BigInt::from_u64(2);
    let one = BigInt::one();

    loop {
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        indices.shuffle(rng);
        let chosen: Vec<BigInt> = indices[..h].iter().map(|&i| pool[i].clone()).collect();

        let mut half = one.clone();
        for m in &chosen {
            half = mul(&half, m, RADIX)?;
        }
        let p = add(&mul(&two, &half, RADIX)?, &one, RADIX)?;

        if pocklington_test(rng, &p, &chosen, witnesses)? {
            return Ok(PocklingtonCertificate { prime: p, factors: chosen, pool });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::trial_division::trial_division;
    use crate::rng::test_support::seeded;

    #[test]
    fn generate_with_factorization_produces_a_certified_prime() {
        let mut rng = seeded(200);
        let cert = generate_with_factorization(&mut rng, 6, 10, 3, 20).unwrap();
        assert!(trial_division(&cert.prime).unwrap());
        assert_eq!(cert.factors.len(), 3);
        assert_eq!(cert.pool.len(), 6);

        // p - 1 must equal 2 * product(factors).
        let one = BigInt::one();
        let two = BigInt::from_u64(2);
        let p_minus_1 = sub(&cert.prime, &one, 10).unwrap();
        let mut product = one.clone();
        for f in &cert.factors {
            product = mul(&product, f, 10).unwrap();
        }
        assert_eq!(mul(&two, &product, 10).unwrap(), p_minus_1);
    }

    #[test]
    fn generate_with_factorization_rejects_h_larger_than_pool() {
        let mut rng = seeded(201);
        assert!(matches!(
            generate_with_factorization(&mut rng, 4, 10, 5, 10),
            Err(NumberError::InvalidArgument(_))
        ));
    }
}
