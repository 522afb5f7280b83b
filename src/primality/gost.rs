// ===========================================================================
// GOST R 34.10-94 descending-cascade prime generation
// ===========================================================================

use crate::bigint::{add, divide, mul, sub, BigInt};
use crate::error::NumberError;
use crate::modarith::mod_pow;
use crate::primality::generation::generate_small_primes;
use rand_core::RngCore;

const RADIX: u32 = 10;

/// Builds the descending bit-length ladder: `[T, T/2, T/4, ...]` while the
/// last entry is still `>= 34` (so halving it again stays `>= 17`), then one
/// final halving, reversed smallest-first.
fn build_t_list(target_bits: u64) -> Vec<u64> {
    let mut t_list = vec![target_bits];
    while *t_list.last().unwrap() >= 34 {
        t_list.push(t_list.last().unwrap() / 2);
    }
    t_list.reverse();
    t_list
}

/// The two-condition check from GOST R 34.10-94 for a candidate
/// `p = p_current * n + 1`: `2^(p-1) ≡ 1 (mod p)` and `2^n ≢ 1 (mod p)`.
fn gost_primality_check(p: &BigInt, n: &BigInt) -> Result<bool, NumberError> {
    let one = BigInt::one();
    let two = BigInt::from_u64(2);
    let p_minus_1 = sub(p, &one, RADIX)?;

    if mod_pow(&two, &p_minus_1, p)? != one {
        return Ok(false);
    }
    if mod_pow(&two, n, p)? == one {
        return Ok(false);
    }
    Ok(true)
}

/// Generates a prime of bit-length `target_bits` (`>= 17`) by the GOST
/// R 34.10-94 descending-cascade construction: seed a small base prime, then
/// repeatedly extend it to roughly double the bit length via
/// `p_next = p_current * n + 1` until the target length is reached.
///
/// `progress` is called with a human-readable status message and a flag
/// marking sub-step (per-candidate) messages, mirroring the optional
/// callback in spec §4.17/§6.
pub fn generate_gost(
    rng: &mut dyn RngCore,
    target_bits: u64,
    mut progress: Option<&mut dyn FnMut(&str, bool)>,
) -> Result<BigInt, NumberError> {
    if target_bits < 17 {
        return Err(NumberError::InvalidArgument(
            "GOST generation requires a target bit length of at least 17".to_string(),
        ));
    }

    let t_list = build_t_list(target_bits);
    let one = BigInt::one();
    let two = BigInt::from_u64(2);

    if let Some(cb) = progress.as_deref_mut() {
        cb(&format!("Step 1: generating base prime ({} bits)...", t_list[0]), false);
    }
    let mut p_current = generate_small_primes(rng, 1, t_list[0])?
        .into_iter()
        .next()
        .expect("generate_small_primes(rng, 1, _) always returns exactly one prime");
    if let Some(cb) = progress.as_deref_mut() {
        cb(&format!("Base prime: {}", p_current.format(RADIX)?), false);
    }

    for (i, &t_next) in t_list.iter().enumerate().skip(1) {
        if let Some(cb) = progress.as_deref_mut() {
            cb(&format!("Step {}: generating a {}-bit prime...", i + 1, t_next), false);
        }

        let min_p_next = {
            let mut v = one.clone();
            for _ in 0..(t_next - 1) {
                v = mul(&v, &two, RADIX)?;
            }
            v
        };
        let (mut n, _) = divide(&min_p_next, &p_current, RADIX)?;
        let (_, n_parity) = divide(&n, &two, RADIX)?;
        if !n_parity.is_zero() {
            n = add(&n, &one, RADIX)?;
        }

        loop {
            let p_next = add(&mul(&p_current, &n, RADIX)?, &one, RADIX)?;

            if p_next.bit_length()? > t_next {
                n = add(&n, &two, RADIX)?;
                continue;
            }

            if let Some(cb) = progress.as_deref_mut() {
                cb(&format!("Checking candidate N={}...", n.format(RADIX)?), true);
            }

            if gost_primality_check(&p_next, &n)? {
                p_current = p_next;
                if let Some(cb) = progress.as_deref_mut() {
                    cb(&format!("Found intermediate prime: {}", p_current.format(RADIX)?), false);
                }
                break;
            } else {
                n = add(&n, &two, RADIX)?;
            }
        }
    }

    if let Some(cb) = progress.as_deref_mut() {
        cb("Generation complete.", false);
    }

    Ok(p_current)
}
