// ===========================================================================
// Signed add/sub/mul/divide over BigInt
//
// Signed operations are factored as (sign decision, magnitude operation):
// the magnitude helpers below never look at the sign bit, and the public
// functions pick which magnitude helper to call and what sign to stamp on
// the result. Keeps the carry/borrow loops free of sign branches.
// ===========================================================================

use super::core::{BigInt, MAX_RADIX, MIN_RADIX};
use crate::error::NumberError;
use std::cmp::Ordering;

fn check_radix(radix: u32) -> Result<(), NumberError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(NumberError::InvalidRadix(radix))
    }
}

/// `|a| + |b|` in the given radix.
fn add_magnitude(a: &[u8], b: &[u8], radix: u32) -> Vec<u8> {
    let radix = radix as u16;
    let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry: u16 = 0;
    for i in 0..a.len().max(b.len()) {
        let da = *a.get(i).unwrap_or(&0) as u16;
        let db = *b.get(i).unwrap_or(&0) as u16;
        let total = da + db + carry;
        result.push((total % radix) as u8);
        carry = total / radix;
    }
    if carry > 0 {
        result.push(carry as u8);
    }
    result
}

/// `|a| - |b|` in the given radix. Requires `|a| >= |b|`.
fn sub_magnitude(a: &[u8], b: &[u8], radix: u32) -> Vec<u8> {
    let radix = radix as i32;
    let mut result = Vec::with_capacity(a.len());
    let mut borrow: i32 = 0;
    for i in 0..a.len() {
        let da = a[i] as i32;
        let db = *b.get(i).unwrap_or(&0) as i32;
        let mut diff = da - db - borrow;
        if diff < 0 {
            diff += radix;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }
    result
}

fn compare_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

/// `add(a, b)` per spec §4.2: same sign adds magnitudes; opposite signs
/// subtract the smaller magnitude from the larger and take the sign of the
/// larger operand (ties give non-negative zero).
pub fn add(a: &BigInt, b: &BigInt, radix: u32) -> Result<BigInt, NumberError> {
    check_radix(radix)?;
    if a.sign() == b.sign() {
        let digits = add_magnitude(a.digits(), b.digits(), radix);
        Ok(BigInt::from_raw(a.sign(), digits))
    } else {
        match compare_magnitude(a.digits(), b.digits()) {
            Ordering::Less => {
                let digits = sub_magnitude(b.digits(), a.digits(), radix);
                Ok(BigInt::from_raw(b.sign(), digits))
            }
            _ => {
                let digits = sub_magnitude(a.digits(), b.digits(), radix);
                Ok(BigInt::from_raw(a.sign(), digits))
            }
        }
    }
}

pub fn sub(a: &BigInt, b: &BigInt, radix: u32) -> Result<BigInt, NumberError> {
    add(a, &b.negate(), radix)
}

/// Schoolbook O(n*m) multiplication; sign is the XOR of operand signs,
/// forced non-negative for a zero product.
pub fn mul(a: &BigInt, b: &BigInt, radix: u32) -> Result<BigInt, NumberError> {
    check_radix(radix)?;
    if a.is_zero() || b.is_zero() {
        return Ok(BigInt::zero());
    }

    let (da, db) = (a.digits(), b.digits());
    let radix_u = radix as u32;
    let mut result = vec![0u32; da.len() + db.len()];
    for i in 0..db.len() {
        let mut carry: u32 = 0;
        for j in 0..da.len() {
            let total = result[i + j] + da[j] as u32 * db[i] as u32 + carry;
            result[i + j] = total % radix_u;
            carry = total / radix_u;
        }
        if carry > 0 {
            result[i + da.len()] += carry;
        }
    }
    let digits: Vec<u8> = result.into_iter().map(|d| d as u8).collect();
    Ok(BigInt::from_raw(a.sign() != b.sign(), digits))
}

/// `|a|` compared against `|b|` expressed as digit `d` (`0..radix`) times `|b|`.
fn magnitude_at_least_d_times(current: &[u8], b: &[u8], d: u32, radix: u32) -> bool {
    if d == 0 {
        return true;
    }
    let scaled = mul_small(b, d, radix);
    compare_magnitude(current, &scaled) != Ordering::Less
}

/// Multiplies a magnitude by a single digit `d` in the given radix.
fn mul_small(b: &[u8], d: u32, radix: u32) -> Vec<u8> {
    let mut result = Vec::with_capacity(b.len() + 1);
    let mut carry: u32 = 0;
    for &digit in b {
        let total = digit as u32 * d + carry;
        result.push((total % radix) as u8);
        carry = total / radix;
    }
    while carry > 0 {
        result.push((carry % radix) as u8);
        carry /= radix;
    }
    if result.is_empty() {
        result.push(0);
    }
    result
}

/// Long division of magnitudes in the given radix, schoolbook with a
/// binary search per output digit (radix can be as large as 36, so the
/// inner probe is `ceil(log2(radix)) = 6` multiplications per digit
/// instead of up to 35 with a linear scan). Mirrors the reference
/// implementation's "no leading zero digit" rule: nothing is emitted into
/// the quotient until the running dividend first reaches `>= |b|`.
fn divide_magnitude(a: &[u8], b: &[u8], radix: u32) -> (Vec<u8>, Vec<u8>) {
    let mut quotient_digits_msb_first: Vec<u8> = Vec::new();
    let mut current: Vec<u8> = vec![0];
    let mut started = false;

    for &digit in a.iter().rev() {
        // current = current * radix + digit
        current = mul_small(&current, radix, radix);
        current = add_magnitude(&current, &[digit], radix);

        if !started && compare_magnitude(&current, b) == Ordering::Less {
            continue;
        }
        started = true;

        let (mut lo, mut hi) = (0u32, radix - 1);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if magnitude_at_least_d_times(&current, b, mid, radix) {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        let q_digit = lo;
        let subtrahend = mul_small(b, q_digit, radix);
        current = sub_magnitude(&current, &subtrahend, radix);
        let mut current_trim = current.clone();
        while current_trim.len() > 1 && *current_trim.last().unwrap() == 0 {
            current_trim.pop();
        }
        current = current_trim;

        quotient_digits_msb_first.push(q_digit as u8);
    }

    if quotient_digits_msb_first.is_empty() {
        quotient_digits_msb_first.push(0);
    }
    quotient_digits_msb_first.reverse();
    (quotient_digits_msb_first, current)
}

/// `divide(a, b)` per spec §4.4. T-division: the remainder takes the sign
/// of the dividend, the quotient the XOR of operand signs; both are forced
/// non-negative when they're zero.
pub fn divide(a: &BigInt, b: &BigInt, radix: u32) -> Result<(BigInt, BigInt), NumberError> {
    check_radix(radix)?;
    if b.is_zero() {
        return Err(NumberError::DivisionByZero);
    }
    if compare_magnitude(a.digits(), b.digits()) == Ordering::Less {
        return Ok((BigInt::zero(), a.clone()));
    }

    let (q_digits, r_digits) = divide_magnitude(a.digits(), b.digits(), radix);
    let q = BigInt::from_raw(a.sign() != b.sign(), q_digits);
    let r = BigInt::from_raw(a.sign(), r_digits);
    Ok((q, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn add_commutes_and_handles_signs() {
        assert_eq!(add(&n("7"), &n("5"), 10).unwrap(), n("12"));
        assert_eq!(add(&n("-7"), &n("-5"), 10).unwrap(), n("-12"));
        assert_eq!(add(&n("7"), &n("-5"), 10).unwrap(), n("2"));
        assert_eq!(add(&n("5"), &n("-7"), 10).unwrap(), n("-2"));
        assert_eq!(add(&n("5"), &n("-5"), 10).unwrap(), n("0"));
        assert!(!add(&n("5"), &n("-5"), 10).unwrap().is_negative());
    }

    #[test]
    fn mul_sign_rules() {
        assert_eq!(mul(&n("-3"), &n("4"), 10).unwrap(), n("-12"));
        assert_eq!(mul(&n("3"), &n("-4"), 10).unwrap(), n("-12"));
        assert_eq!(mul(&n("-3"), &n("-4"), 10).unwrap(), n("12"));
        let z = mul(&n("-3"), &n("0"), 10).unwrap();
        assert!(z.is_zero() && !z.is_negative());
    }

    #[test]
    fn divide_seed_scenarios() {
        let (q, r) = divide(&n("123"), &n("10"), 10).unwrap();
        assert_eq!((q, r), (n("12"), n("3")));

        let (q, r) = divide(&n("-123"), &n("10"), 10).unwrap();
        assert_eq!((q, r), (n("-12"), n("-3")));

        let (q, r) = divide(&n("123"), &n("-10"), 10).unwrap();
        assert_eq!((q, r), (n("-12"), n("3")));
    }

    #[test]
    fn divide_by_zero_errors() {
        assert_eq!(divide(&n("1"), &n("0"), 10), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn division_identity_holds() {
        for (a, b) in [("100", "7"), ("-100", "7"), ("100", "-7"), ("999999999999", "37")] {
            let (a, b) = (n(a), n(b));
            let (q, r) = divide(&a, &b, 10).unwrap();
            let reconstructed = add(&mul(&q, &b, 10).unwrap(), &r, 10).unwrap();
            assert_eq!(reconstructed, a);
            assert!(r.abs() < b.abs() || b.abs().is_zero());
        }
    }

    #[test]
    fn large_radix_division_matches_binary_search_contract() {
        // radix 36 exercises the wide binary search range directly.
        let a = BigInt::parse("ZZZZ", 36).unwrap();
        let b = BigInt::parse("Z", 36).unwrap();
        let (q, r) = divide(&a, &b, 36).unwrap();
        let reconstructed = add(&mul(&q, &b, 36).unwrap(), &r, 36).unwrap();
        assert_eq!(reconstructed, a);
    }

    #[test]
    fn ring_identities() {
        let (a, b, c) = (n("17"), n("-5"), n("9"));
        assert_eq!(add(&a, &b, 10).unwrap(), add(&b, &a, 10).unwrap());
        assert_eq!(mul(&a, &b, 10).unwrap(), mul(&b, &a, 10).unwrap());
        let lhs = mul(&a, &add(&b, &c, 10).unwrap(), 10).unwrap();
        let rhs = add(&mul(&a, &b, 10).unwrap(), &mul(&a, &c, 10).unwrap(), 10).unwrap();
        assert_eq!(lhs, rhs);
    }
}
