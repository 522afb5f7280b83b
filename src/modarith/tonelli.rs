// ===========================================================================
// Modular square roots mod p*q, both primes == 3 (mod 4)
// ===========================================================================

use super::mod_pow::{mod_inverse, mod_pow};
use crate::bigint::{add, divide, mul, sub, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

/// Returns the four roots `r` with `r^2 == c (mod p*q)`, given `c` and two
/// primes `p, q` each `== 3 (mod 4)`.
///
/// `p` and `q` being `3 mod 4` lets each prime's square root be computed
/// directly as `c^((p+1)/4) mod p` (spec §4.9); this routine does not check
/// the precondition, matching the reference implementation — callers are
/// expected to supply primes of that shape.
pub fn modular_sqrt(c: &BigInt, p: &BigInt, q: &BigInt) -> Result<[BigInt; 4], NumberError> {
    let one = BigInt::one();
    let four = BigInt::from_u64(4);

    let n = mul(p, q, RADIX)?;

    let exp_p_num = add(p, &one, RADIX)?;
    let (exp_p, _) = divide(&exp_p_num, &four, RADIX)?;
    let m_p = mod_pow(c, &exp_p, p)?;
    let m_p_neg = sub(p, &m_p, RADIX)?;

    let exp_q_num = add(q, &one, RADIX)?;
    let (exp_q, _) = divide(&exp_q_num, &four, RADIX)?;
    let m_q = mod_pow(c, &exp_q, q)?;
    let m_q_neg = sub(q, &m_q, RADIX)?;

    let q_inv_p = mod_inverse(q, p)?;
    let p_inv_q = mod_inverse(p, q)?;
    let term_a = mul(q, &q_inv_p, RADIX)?;
    let term_b = mul(p, &p_inv_q, RADIX)?;

    let combine = |mp: &BigInt, mq: &BigInt| -> Result<BigInt, NumberError> {
        let part1 = mul(mp, &term_a, RADIX)?;
        let part2 = mul(mq, &term_b, RADIX)?;
        let sum = add(&part1, &part2, RADIX)?;
        let (_, root) = divide(&sum, &n, RADIX)?;
        Ok(root)
    };

    Ok([
        combine(&m_p, &m_q)?,
        combine(&m_p, &m_q_neg)?,
        combine(&m_p_neg, &m_q)?,
        combine(&m_p_neg, &m_q_neg)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn modular_sqrt_seed_scenario() {
        let roots = modular_sqrt(&n("23"), &n("7"), &n("11")).unwrap();
        let mut formatted: Vec<String> =
            roots.iter().map(|r| r.format(10).unwrap()).collect();
        formatted.sort();
        assert_eq!(formatted, vec!["10", "32", "45", "67"]);
    }

    #[test]
    fn every_root_squares_back_to_c() {
        let (p, q, c) = (n("7"), n("11"), n("23"));
        let modulus = mul(&p, &q, RADIX).unwrap();
        let roots = modular_sqrt(&c, &p, &q).unwrap();
        for r in &roots {
            let squared = mul(r, r, RADIX).unwrap();
            let (_, reduced) = divide(&squared, &modulus, RADIX).unwrap();
            let (_, c_reduced) = divide(&c, &modulus, RADIX).unwrap();
            assert_eq!(reduced, c_reduced);
        }
    }
}
