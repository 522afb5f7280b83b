// ===========================================================================
// Quadratic and cubic residue enumeration
// ===========================================================================

use crate::bigint::{add, divide, mul, sub, BigInt};
use crate::error::NumberError;

const RADIX: u32 = 10;

fn residues(n: &BigInt, power: u32) -> Result<Vec<BigInt>, NumberError> {
    let one = BigInt::one();
    let mut seen = Vec::new();
    let mut i = BigInt::one();
    let limit = sub(n, &one, RADIX)?;

    while i <= limit {
        let mut value = i.clone();
        for _ in 1..power {
            value = mul(&value, &i, RADIX)?;
        }
        let (_, residue) = divide(&value, n, RADIX)?;
        if !seen.contains(&residue) {
            seen.push(residue);
        }
        i = add(&i, &one, RADIX)?;
    }

    seen.sort();
    Ok(seen)
}

/// `{ i^2 mod n : 1 <= i <= n-1 }`, deduplicated and ascending. Intended
/// for small `n` (spec §4.14) — this is an O(n) enumeration.
pub fn quadratic_residues(n: &BigInt) -> Result<Vec<BigInt>, NumberError> {
    residues(n, 2)
}

/// `{ i^3 mod n : 1 <= i <= n-1 }`, deduplicated and ascending.
pub fn cubic_residues(n: &BigInt) -> Result<Vec<BigInt>, NumberError> {
    residues(n, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    fn vals(v: &[&str]) -> Vec<BigInt> {
        v.iter().map(|s| n(s)).collect()
    }

    #[test]
    fn quadratic_residues_seed_scenario() {
        assert_eq!(
            quadratic_residues(&n("10")).unwrap(),
            vals(&["1", "4", "5", "6", "9"])
        );
    }

    #[test]
    fn cubic_residues_seed_scenario() {
        assert_eq!(cubic_residues(&n("7")).unwrap(), vals(&["1", "6"]));
    }
}
