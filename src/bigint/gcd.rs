// ===========================================================================
// GCD and extended GCD
//
// Both always operate at radix 10 internally, matching spec §4.5/§6 (their
// external signatures carry no radix parameter) and the reference
// implementation, which hardcodes base 10 for these two operations
// regardless of the radix its caller happens to be working in.
// ===========================================================================

use super::arithmetic::divide;
use super::core::BigInt;

const RADIX: u32 = 10;

/// Euclidean GCD: `(a, b) <- (b, a mod b)` until `b == 0`. Assumes
/// non-negative inputs, as all callers in this crate already normalize
/// operands before calling in (spec §4.5).
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let (_, r) = divide(&a, &b, RADIX).expect("b is non-zero by the loop guard");
        a = b;
        b = r;
    }
    a
}

/// Extended Euclid: returns `(d, x, y)` with `d = gcd(a, b) = a*x + b*y`,
/// via the iterative two-register form (spec §4.5). Bézout coefficients
/// routinely go negative, which is why this lives on top of signed
/// arithmetic rather than unsigned.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, next_r) =
            divide(&old_r, &r, RADIX).expect("r is non-zero by the loop guard");

        old_r = std::mem::replace(&mut r, next_r);

        let next_x = super::arithmetic::sub(
            &old_x,
            &super::arithmetic::mul(&q, &x, RADIX).unwrap(),
            RADIX,
        )
        .unwrap();
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = super::arithmetic::sub(
            &old_y,
            &super::arithmetic::mul(&q, &y, RADIX).unwrap(),
            RADIX,
        )
        .unwrap();
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::arithmetic::{add, mul};

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(&n("48"), &n("18")), n("6"));
        assert_eq!(gcd(&n("0"), &n("5")), n("5"));
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        let (d, x, y) = extended_gcd(&n("99"), &n("78"));
        assert_eq!(d, n("3"));
        let lhs = add(&mul(&n("99"), &x, 10).unwrap(), &mul(&n("78"), &y, 10).unwrap(), 10).unwrap();
        assert_eq!(lhs, d);
        assert_eq!(d, gcd(&n("99"), &n("78")));
    }

    #[test]
    fn extended_gcd_coprime() {
        let (d, x, y) = extended_gcd(&n("17"), &n("5"));
        assert_eq!(d, n("1"));
        let lhs = add(&mul(&n("17"), &x, 10).unwrap(), &mul(&n("5"), &y, 10).unwrap(), 10).unwrap();
        assert_eq!(lhs, n("1"));
    }
}
