// ===========================================================================
// Random candidate generation: small certified primes, and generate_prime
// ===========================================================================

use crate::bigint::{add, divide, BigInt};
use crate::error::NumberError;
use crate::primality::solovay_strassen::solovay_strassen;
use crate::primality::trial_division::trial_division;
use crate::rng::gen_bigint_with_bit_length;
use rand_core::RngCore;

const RADIX: u32 = 10;
const FERMAT_ROUNDS: u32 = 5;

fn is_even(n: &BigInt) -> Result<bool, NumberError> {
    let (_, r) = divide(n, &BigInt::from_u64(2), RADIX)?;
    Ok(r.is_zero())
}

/// Draws a random odd candidate of exactly `bits` bits.
fn random_odd_candidate(rng: &mut dyn RngCore, bits: u64) -> Result<BigInt, NumberError> {
    let candidate = gen_bigint_with_bit_length(rng, bits)?;
    if is_even(&candidate)? {
        add(&candidate, &BigInt::one(), RADIX)
    } else {
        Ok(candidate)
    }
}

/// Generates `count` primes of bit-length `bits`, each certified by trial
/// division, via repeated random-odd-candidate draws.
pub fn generate_small_primes(
    rng: &mut dyn RngCore,
    count: usize,
    bits: u64,
) -> Result<Vec<BigInt>, NumberError> {
    let mut primes = Vec::with_capacity(count);
    while primes.len() < count {
        let candidate = random_odd_candidate(rng, bits)?;
        if trial_division(&candidate)? {
            primes.push(candidate);
        }
    }
    Ok(primes)
}

/// Generates a probable prime of the given bit length, accepted once it
/// passes both Fermat (5 rounds) and Solovay-Strassen (`k` rounds).
pub fn generate_prime(rng: &mut dyn RngCore, bits: u64, k: u32) -> Result<BigInt, NumberError> {
    if bits < 2 {
        return Err(NumberError::InvalidArgument(
            "bit length must be at least 2".to_string(),
        ));
    }

    loop {
        let candidate = random_odd_candidate(rng, bits)?;
        if crate::primality::fermat::fermat(&candidate, FERMAT_ROUNDS, rng)?
            && solovay_strassen(&candidate, k, rng)?
        {
            return Ok(candidate);
        }
    }
}
