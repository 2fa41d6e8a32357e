use crate::errors::SwapError;
use crate::utils::constants::PIP_DECIMALS;
use bigdecimal::{BigDecimal, Zero};
use num_bigint::{BigInt, BigUint};

/// Parse a smallest-unit amount encoded as a plain decimal integer string.
///
/// Only ASCII digits are accepted: no sign, no separators, no whitespace.
pub fn parse_pip(value: &str) -> Result<BigUint, SwapError> {
    if value.is_empty() {
        return Err(SwapError::Parse { value: value.to_string(), reason: "empty amount" });
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SwapError::Parse { value: value.to_string(), reason: "amount must contain only decimal digits" });
    }

    BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| SwapError::Parse { value: value.to_string(), reason: "amount is not a decimal integer" })
}

/// Exact smallest-unit to display-unit conversion (divides by 10^18 by moving the scale).
pub fn pip_to_bip(pip: &BigUint) -> BigDecimal {
    BigDecimal::new(BigInt::from(pip.clone()), PIP_DECIMALS)
}

pub fn volume_in_bip(volume: &str) -> Result<BigDecimal, SwapError> {
    Ok(pip_to_bip(&parse_pip(volume)?))
}

/// Exchange rate `reserve_to / reserve_from`, both given in smallest units.
pub fn compute_price(reserve_to: &str, reserve_from: &str) -> Result<BigDecimal, SwapError> {
    let numerator = volume_in_bip(reserve_to)?;
    let denominator = volume_in_bip(reserve_from)?;
    if denominator.is_zero() {
        return Err(SwapError::ZeroReserve { reserve: reserve_from.to_string() });
    }

    Ok(numerator / denominator)
}

/// Render a display-unit value with at most 18 fractional digits and no exponent.
pub fn format_bip(value: &BigDecimal) -> String {
    value.round(PIP_DECIMALS).normalized().to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_pip_rejects_malformed() {
        for malformed in ["", "12a", "-5", "+5", "1_000", " 1", "1.5", "0x10"] {
            let result = parse_pip(malformed);
            assert!(matches!(result, Err(SwapError::Parse { .. })), "accepted {malformed:?}");
        }
    }

    #[test]
    fn test_pip_to_bip_is_exact() -> eyre::Result<()> {
        assert_eq!(volume_in_bip("2000000000000000000")?, BigDecimal::from(2));
        assert_eq!(volume_in_bip("1")?, BigDecimal::from_str("0.000000000000000001")?);
        assert_eq!(volume_in_bip("0")?, BigDecimal::zero());

        // numeric(100) sized reserve survives without rounding
        let huge = "9".repeat(100);
        let bip = volume_in_bip(&huge)?;
        let back = bip * BigDecimal::from_str("1000000000000000000")?;
        assert_eq!(back, BigDecimal::from_str(&huge)?);

        Ok(())
    }

    #[test]
    fn test_compute_price() -> eyre::Result<()> {
        let price = compute_price("1000000000000000000", "4000000000000000000")?;
        assert_eq!(price, BigDecimal::from_str("0.25")?);

        let price = compute_price("0", "4000000000000000000")?;
        assert!(price.is_zero());

        Ok(())
    }

    #[test]
    fn test_compute_price_zero_reserve() {
        let result = compute_price("1000000000000000000", "0");
        assert_eq!(result, Err(SwapError::ZeroReserve { reserve: "0".to_string() }));
    }

    #[test]
    fn test_format_bip() -> eyre::Result<()> {
        assert_eq!(format_bip(&BigDecimal::from(4)), "4");
        assert_eq!(format_bip(&BigDecimal::from_str("0.000000000000000001")?), "0.000000000000000001");
        assert_eq!(format_bip(&BigDecimal::from_str("1.0000000000000000004")?), "1");
        assert_eq!(format_bip(&BigDecimal::from_str("123456789012345678901234567890")?), "123456789012345678901234567890");

        Ok(())
    }
}
