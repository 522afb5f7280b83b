// ===========================================================================
// Deterministic trial division
// ===========================================================================

use crate::bigint::BigInt;
use crate::error::NumberError;

/// Deterministic primality by trial division, for candidates whose decimal
/// representation is at most 18 digits (so the whole computation fits in a
/// `u64`, per spec §4.15). Larger candidates are `InvalidArgument`.
pub fn trial_division(n: &BigInt) -> Result<bool, NumberError> {
    let decimal = n.format(10)?;
    let digit_count = decimal.trim_start_matches('-').len();
    if digit_count > 18 {
        return Err(NumberError::InvalidArgument(
            "trial division is only defined for candidates up to 10^18".to_string(),
        ));
    }

    let value = n
        .to_u64()
        .ok_or_else(|| NumberError::InvalidArgument("negative candidate".to_string()))?;

    Ok(is_prime_u64(value))
}

fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let limit = (n as f64).sqrt() as u64 + 1;
    let mut i = 5;
    while i <= limit {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s, 10).unwrap()
    }

    #[test]
    fn trial_division_small_cases() {
        assert!(!trial_division(&n("0")).unwrap());
        assert!(!trial_division(&n("1")).unwrap());
        assert!(trial_division(&n("2")).unwrap());
        assert!(trial_division(&n("3")).unwrap());
        assert!(!trial_division(&n("4")).unwrap());
        assert!(trial_division(&n("97")).unwrap());
        assert!(!trial_division(&n("91")).unwrap());
    }

    #[test]
    fn trial_division_rejects_too_large_candidates() {
        let huge = n("1000000000000000000000"); // 22 digits
        assert!(matches!(trial_division(&huge), Err(NumberError::InvalidArgument(_))));
    }

    #[test]
    fn trial_division_handles_18_digit_boundary() {
        // Largest 18-digit value, composite (divisible by 3): should not error.
        let boundary = n("999999999999999999");
        assert!(trial_division(&boundary).is_ok());
    }
}
