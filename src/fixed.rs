//! WAD fixed-point arithmetic helpers.
//!
//! Prices and valuations are carried as integers scaled by `10^18` (WAD).
//! All helpers use checked arithmetic and report failure through `Option`;
//! callers translate `None` into [`crate::error::PricingError::Overflow`].

use alloy_primitives::{I256, Sign, U256};

/// Number of fractional decimal digits in the canonical price scale.
pub const WAD_DECIMALS: u8 = 18;

/// The canonical fixed-point unit, `10^18`.
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Signed counterpart of [`WAD`].
pub const WAD_SIGNED: I256 = I256::from_raw(WAD);

/// Rescales `value` from `decimals` fractional digits to the WAD scale.
///
/// Returns `None` when the scale-up multiplication overflows 256 bits. A
/// scale-down factor too large to represent yields zero, consistent with
/// integer division.
pub fn scale_to_wad(value: U256, decimals: u8) -> Option<U256> {
    if decimals <= WAD_DECIMALS {
        let exp = U256::from(WAD_DECIMALS - decimals);
        let factor = U256::from(10u64).checked_pow(exp)?;
        value.checked_mul(factor)
    } else {
        let exp = U256::from(decimals - WAD_DECIMALS);
        match U256::from(10u64).checked_pow(exp) {
            Some(factor) => Some(value / factor),
            None => Some(U256::ZERO),
        }
    }
}

/// Multiplicative inverse preserving the WAD scale: `WAD^2 / value`.
///
/// `WAD^2 = 10^36` fits comfortably in 256 bits, twice the width of any
/// realistic price, so the multiply-then-divide never loses range.
pub fn reciprocal(value: U256) -> Option<U256> {
    if value.is_zero() {
        return None;
    }
    WAD.checked_mul(WAD).map(|squared| squared / value)
}

/// `a * b / WAD`, the product of two WAD-scaled values.
pub fn precise_mul(a: U256, b: U256) -> Option<U256> {
    a.checked_mul(b).map(|product| product / WAD)
}

/// `a * WAD / b`, the quotient of two WAD-scaled values.
pub fn precise_div(a: U256, b: U256) -> Option<U256> {
    if b.is_zero() {
        return None;
    }
    a.checked_mul(WAD).map(|scaled| scaled / b)
}

/// Signed `a * b / WAD`, truncating toward zero.
pub fn precise_mul_signed(a: I256, b: I256) -> Option<I256> {
    a.checked_mul(b)?.checked_div(WAD_SIGNED)
}

/// Signed `a * WAD / b`, truncating toward zero.
pub fn precise_div_signed(a: I256, b: I256) -> Option<I256> {
    a.checked_mul(WAD_SIGNED)?.checked_div(b)
}

/// Checked narrowing from the signed accumulator to the unsigned valuation
/// type. `None` for negative input.
pub fn to_unsigned(value: I256) -> Option<U256> {
    if value.is_negative() {
        None
    } else {
        Some(value.unsigned_abs())
    }
}

/// Checked widening of an unsigned value into the signed accumulator type.
/// `None` when the value exceeds `I256::MAX`.
pub fn to_signed(value: U256) -> Option<I256> {
    I256::checked_from_sign_and_abs(Sign::Positive, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wad_int(n: u64) -> U256 {
        U256::from(n) * WAD
    }

    #[test]
    fn test_scale_up_to_wad() {
        // 1803.22583 reported with 5 fractional digits
        let raw = U256::from(180_322_583u64);
        let scaled = scale_to_wad(raw, 5).unwrap();
        let expected = raw * U256::from(10u64).pow(U256::from(13u64));
        assert_eq!(scaled, expected);
    }

    #[test]
    fn test_scale_down_to_wad() {
        let raw = U256::from(1_500u64) * U256::from(10u64).pow(U256::from(21u64));
        assert_eq!(scale_to_wad(raw, 21).unwrap(), wad_int(1_500));
    }

    #[test]
    fn test_scale_identity_at_wad_decimals() {
        let raw = wad_int(42);
        assert_eq!(scale_to_wad(raw, 18).unwrap(), raw);
    }

    #[test]
    fn test_scale_up_overflow() {
        assert_eq!(scale_to_wad(U256::MAX, 0), None);
    }

    #[test]
    fn test_scale_down_extreme_decimals_yields_zero() {
        let raw = U256::from(123u64);
        assert_eq!(scale_to_wad(raw, 255).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_reciprocal_round_trip() {
        let price = wad_int(1_500);
        let inverse = reciprocal(price).unwrap();
        let product = price * inverse;
        let wad_squared = WAD * WAD;
        // Integer truncation loses at most one unit of the forward price.
        assert!(wad_squared - product < price);
    }

    #[test]
    fn test_reciprocal_of_zero() {
        assert_eq!(reciprocal(U256::ZERO), None);
    }

    #[test]
    fn test_precise_mul_div() {
        let a = wad_int(3);
        let b = wad_int(7);
        assert_eq!(precise_mul(a, b).unwrap(), wad_int(21));
        assert_eq!(precise_div(wad_int(21), b).unwrap(), a);
        assert_eq!(precise_div(a, U256::ZERO), None);
    }

    #[test]
    fn test_signed_helpers_track_sign() {
        let a = I256::try_from(-3i64).unwrap() * WAD_SIGNED;
        let b = I256::try_from(7i64).unwrap() * WAD_SIGNED;
        let product = precise_mul_signed(a, b).unwrap();
        assert_eq!(product, I256::try_from(-21i64).unwrap() * WAD_SIGNED);

        let quotient = precise_div_signed(product, b).unwrap();
        assert_eq!(quotient, a);
    }

    #[test]
    fn test_signed_division_truncates_toward_zero() {
        let a = I256::try_from(-1i64).unwrap() * WAD_SIGNED;
        let b = I256::try_from(3i64).unwrap() * WAD_SIGNED;
        let quotient = precise_div_signed(a, b).unwrap();
        // -0.333... truncates to -0.333...333, not away from zero
        assert_eq!(quotient, I256::try_from(-333_333_333_333_333_333i64).unwrap());
    }

    #[test]
    fn test_checked_casts() {
        assert_eq!(to_unsigned(I256::try_from(5i64).unwrap()), Some(U256::from(5u64)));
        assert_eq!(to_unsigned(I256::try_from(-5i64).unwrap()), None);
        assert_eq!(to_unsigned(I256::ZERO), Some(U256::ZERO));

        assert_eq!(to_signed(U256::from(5u64)), Some(I256::try_from(5i64).unwrap()));
        assert_eq!(to_signed(U256::MAX), None);
    }
}
