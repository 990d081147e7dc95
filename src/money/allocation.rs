// ============================================================================
// Allocation
// Proportional and equal splitting with exact remainder distribution
// ============================================================================

use crate::numeric::{FixedPointDecimal, NumericError, NumericResult, Operand, RoundingMode};
use smallvec::SmallVec;

/// Split `amount` proportionally to `ratios`.
///
/// Each share is `amount * ratio / total` rounded half-up to the smallest
/// unit, then the shares are corrected one smallest unit at a time, in ratio
/// order, until they sum to `amount` exactly:
/// - a shortfall goes to shares whose ratio is non-zero
/// - an excess is taken back from shares that were rounded away from zero
///
/// A share therefore never ends up on the other side of zero from `amount`.
///
/// # Example
/// ```text
/// 1000.00 split [1, 1, 1]
///   raw shares: 333.33, 333.33, 333.33  (sum 999.99)
///   remainder:  +0.01 -> first share
///   result:     333.34, 333.33, 333.33
///
/// 0.02 split [1, 3, 3, 3]
///   raw shares: 0.00, 0.01, 0.01, 0.01  (sum 0.03)
///   remainder:  -0.01 -> first rounded-up share
///   result:     0.00, 0.00, 0.01, 0.01
/// ```
///
/// # Errors
/// - `InvalidOperand` if `ratios` is empty or holds a negative ratio
/// - `DivisionByZero` if every ratio is zero
/// - `Overflow` if `amount * ratio` leaves i128 range
pub(crate) fn allocate(
    amount: FixedPointDecimal,
    ratios: &[Operand],
) -> NumericResult<Vec<FixedPointDecimal>> {
    if ratios.is_empty() || ratios.iter().any(|ratio| ratio.is_negative()) {
        return Err(NumericError::InvalidOperand);
    }

    // Bring every ratio to a common scale so the arithmetic stays integral
    let common_scale = ratios
        .iter()
        .map(|ratio| ratio.to_scaled().1)
        .max()
        .unwrap_or(0);

    let mut weights: SmallVec<[i128; 8]> = SmallVec::with_capacity(ratios.len());
    let mut total: i128 = 0;
    for ratio in ratios {
        let (mantissa, scale) = ratio.to_scaled();
        let factor = 10i128
            .checked_pow(common_scale - scale)
            .ok_or(NumericError::Overflow)?;
        let weight = mantissa.checked_mul(factor).ok_or(NumericError::Overflow)?;
        total = total.checked_add(weight).ok_or(NumericError::Overflow)?;
        weights.push(weight);
    }

    if total == 0 {
        return Err(NumericError::DivisionByZero);
    }

    let raw = amount.raw_value() as i128;
    let mut shares: SmallVec<[i128; 8]> = SmallVec::with_capacity(weights.len());
    let mut rounded_away: SmallVec<[bool; 8]> = SmallVec::with_capacity(weights.len());
    let mut allocated: i128 = 0;
    for weight in &weights {
        let numerator = raw.checked_mul(*weight).ok_or(NumericError::Overflow)?;
        let share = RoundingMode::HalfUp.divide(numerator, total)?;
        let covered = share.checked_mul(total).ok_or(NumericError::Overflow)?;
        allocated += share;
        shares.push(share);
        rounded_away.push(covered.unsigned_abs() > numerator.unsigned_abs());
    }

    let remainder = raw - allocated;
    if remainder != 0 {
        let step = remainder.signum();
        let over_allocated = step != raw.signum();

        // Half-up overshoots each rounded-away share by at most half a unit,
        // so there are always at least |remainder| of them to take back from.
        let eligible: SmallVec<[usize; 8]> = (0..shares.len())
            .filter(|&index| {
                if over_allocated {
                    rounded_away[index]
                } else {
                    weights[index] > 0
                }
            })
            .collect();

        for index in eligible.iter().cycle().take(remainder.unsigned_abs() as usize) {
            shares[*index] += step;
        }
    }

    tracing::debug!(
        amount = %amount,
        parts = ratios.len(),
        remainder_units = remainder as i64,
        "allocated amount by ratios"
    );

    shares.into_iter().map(into_decimal).collect()
}

/// Upper bound on the number of shares `allocate_to` will build.
pub(crate) const MAX_PARTS: i64 = 1_000_000;

/// Split `amount` into `parts` shares that differ by at most one smallest unit.
///
/// The base share is the truncated quotient in smallest units; the remainder
/// goes one unit each to the first shares.
///
/// # Errors
/// - `InvalidOperand` if `parts` is negative or above [`MAX_PARTS`]
/// - `DivisionByZero` if `parts` is zero
pub(crate) fn allocate_to(
    amount: FixedPointDecimal,
    parts: i64,
) -> NumericResult<Vec<FixedPointDecimal>> {
    if !(0..=MAX_PARTS).contains(&parts) {
        return Err(NumericError::InvalidOperand);
    }
    if parts == 0 {
        return Err(NumericError::DivisionByZero);
    }

    let raw = amount.raw_value() as i128;
    let parts_wide = parts as i128;
    let base = raw / parts_wide;
    let remainder = raw % parts_wide;
    let step = remainder.signum();
    let bumped = remainder.unsigned_abs() as usize;

    tracing::debug!(
        amount = %amount,
        parts,
        remainder_units = remainder as i64,
        "allocated amount into equal parts"
    );

    (0..parts as usize)
        .map(|index| {
            let share = if index < bumped { base + step } else { base };
            into_decimal(share)
        })
        .collect()
}

fn into_decimal(raw: i128) -> NumericResult<FixedPointDecimal> {
    i64::try_from(raw)
        .map(FixedPointDecimal::from_raw)
        .map_err(|_| {
            if raw > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn units(values: &[FixedPointDecimal]) -> Vec<i64> {
        values.iter().map(|v| v.raw_value()).collect()
    }

    fn ints(values: &[i64]) -> Vec<Operand> {
        values.iter().map(|v| Operand::from(*v)).collect()
    }

    #[test]
    fn test_allocate_equal_ratios() {
        let amount = FixedPointDecimal::from_integer(1000).unwrap();
        let shares = allocate(amount, &ints(&[1, 1, 1])).unwrap();
        assert_eq!(units(&shares), vec![33_334, 33_333, 33_333]);
    }

    #[test]
    fn test_allocate_uneven_ratios() {
        // 0.05 split 3:7 -> 0.015 -> 0.02, 0.035 -> 0.04, over by one unit
        let amount = FixedPointDecimal::from_raw(5);
        let shares = allocate(amount, &ints(&[3, 7])).unwrap();
        assert_eq!(units(&shares), vec![1, 4]);
    }

    #[test]
    fn test_allocate_over_allocation_is_taken_back_in_order() {
        // 0.05 split 1:1 -> 0.03 + 0.03 = 0.06
        let amount = FixedPointDecimal::from_raw(5);
        let shares = allocate(amount, &ints(&[1, 1])).unwrap();
        assert_eq!(units(&shares), vec![2, 3]);
    }

    #[test]
    fn test_allocate_negative_amount() {
        let amount = FixedPointDecimal::from_integer(-1000).unwrap();
        let shares = allocate(amount, &ints(&[1, 1, 1])).unwrap();
        assert_eq!(units(&shares), vec![-33_334, -33_333, -33_333]);
    }

    #[test]
    fn test_allocate_decimal_ratios() {
        let amount = FixedPointDecimal::from_integer(100).unwrap();
        let ratios = [
            Operand::from(Decimal::new(7, 1)),  // 0.7
            Operand::from(Decimal::new(25, 2)), // 0.25
            Operand::from(Decimal::new(5, 2)),  // 0.05
        ];
        let shares = allocate(amount, &ratios).unwrap();
        assert_eq!(units(&shares), vec![7_000, 2_500, 500]);
    }

    #[test]
    fn test_allocate_zero_ratio_gets_nothing() {
        let amount = FixedPointDecimal::from_raw(100);
        let shares = allocate(amount, &ints(&[0, 1, 1, 1])).unwrap();
        assert_eq!(units(&shares), vec![0, 34, 33, 33]);
    }

    #[test]
    fn test_allocate_invalid_ratios() {
        let amount = FixedPointDecimal::from_integer(10).unwrap();
        assert_eq!(allocate(amount, &[]), Err(NumericError::InvalidOperand));
        assert_eq!(
            allocate(amount, &ints(&[1, -1])),
            Err(NumericError::InvalidOperand)
        );
        assert_eq!(
            allocate(amount, &ints(&[0, 0])),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_allocate_small_amount_never_flips_sign() {
        // 0.02 split 1:3:3:3 -> 0.002, 0.006 x3 -> 0.00, 0.01 x3, over by one unit
        let shares = allocate(FixedPointDecimal::from_raw(2), &ints(&[1, 3, 3, 3])).unwrap();
        assert_eq!(units(&shares), vec![0, 0, 1, 1]);

        let shares = allocate(FixedPointDecimal::from_raw(-2), &ints(&[1, 3, 3, 3])).unwrap();
        assert_eq!(units(&shares), vec![0, 0, -1, -1]);
    }

    #[test]
    fn test_allocate_excess_skips_shares_rounded_down() {
        // 0.13 split 4:6:6:6 -> 0.0236 -> 0.02, 0.0355 -> 0.04 (x3), over by one unit
        let amount = FixedPointDecimal::from_raw(13);
        let shares = allocate(amount, &ints(&[4, 6, 6, 6])).unwrap();
        assert_eq!(units(&shares), vec![2, 3, 4, 4]);
    }

    #[test]
    fn test_allocate_to() {
        let amount = FixedPointDecimal::from_integer(1001).unwrap();
        let shares = allocate_to(amount, 3).unwrap();
        assert_eq!(units(&shares), vec![33_367, 33_367, 33_366]);

        let negative = FixedPointDecimal::from_raw(-100);
        let shares = allocate_to(negative, 3).unwrap();
        assert_eq!(units(&shares), vec![-34, -33, -33]);
    }

    #[test]
    fn test_allocate_to_more_parts_than_units() {
        let shares = allocate_to(FixedPointDecimal::from_raw(2), 4).unwrap();
        assert_eq!(units(&shares), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_allocate_to_invalid_parts() {
        let amount = FixedPointDecimal::from_integer(10).unwrap();
        assert_eq!(allocate_to(amount, 0), Err(NumericError::DivisionByZero));
        assert_eq!(allocate_to(amount, -2), Err(NumericError::InvalidOperand));
        assert_eq!(
            allocate_to(amount, MAX_PARTS + 1),
            Err(NumericError::InvalidOperand)
        );
        assert_eq!(
            allocate_to(amount, 1_000_000_000_000_000),
            Err(NumericError::InvalidOperand)
        );
    }
}
