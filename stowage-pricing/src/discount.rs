//! Discount lookup and currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use stowage_core::{MembershipTier, PricingError, StowageResult, TierDiscounts, VolumeDiscount};

/// Decimal places kept on every currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Highest percentage among the steps whose threshold the volume reaches.
///
/// Discounts never stack: a volume of 600 against steps at 50/100/500 gets
/// only the 500 step. Returns 0 when no step qualifies.
pub fn volume_discount(table: &[VolumeDiscount], qualifying_volume: Decimal) -> Decimal {
    table
        .iter()
        .filter(|step| step.threshold <= qualifying_volume)
        .map(|step| step.percent)
        .max()
        .unwrap_or(Decimal::ZERO)
}

/// Percentage off for a membership tier.
pub fn tier_discount(tiers: &TierDiscounts, tier: MembershipTier) -> Decimal {
    tiers.percent(tier)
}

/// Take `percent` percent off `amount`. Exact; no rounding.
pub fn percent_off(amount: Decimal, percent: Decimal) -> StowageResult<Decimal> {
    let factor = Decimal::ONE - percent / Decimal::ONE_HUNDRED;
    amount
        .checked_mul(factor)
        .ok_or(PricingError::Overflow { stage: "discount" }.into())
}

/// Round to currency precision, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<VolumeDiscount> {
        vec![
            VolumeDiscount::new(Decimal::from(50), Decimal::from(5)),
            VolumeDiscount::new(Decimal::from(100), Decimal::from(10)),
            VolumeDiscount::new(Decimal::from(500), Decimal::from(15)),
        ]
    }

    #[test]
    fn test_volume_discount_below_first_threshold() {
        assert_eq!(volume_discount(&table(), Decimal::from(49)), Decimal::ZERO);
    }

    #[test]
    fn test_volume_discount_threshold_is_inclusive() {
        assert_eq!(volume_discount(&table(), Decimal::from(50)), Decimal::from(5));
        assert_eq!(volume_discount(&table(), Decimal::from(100)), Decimal::from(10));
    }

    #[test]
    fn test_volume_discount_takes_highest_only() {
        assert_eq!(volume_discount(&table(), Decimal::from(10_000)), Decimal::from(15));
    }

    #[test]
    fn test_volume_discount_empty_table() {
        assert_eq!(volume_discount(&[], Decimal::from(10_000)), Decimal::ZERO);
    }

    #[test]
    fn test_percent_off_exact() {
        let amount = Decimal::new(10_000, 2);
        assert_eq!(percent_off(amount, Decimal::from(5)).unwrap(), Decimal::new(9_500, 2));
        assert_eq!(percent_off(amount, Decimal::ZERO).unwrap(), amount);
        assert_eq!(percent_off(amount, Decimal::ONE_HUNDRED).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_round_currency_midpoint() {
        assert_eq!(round_currency(Decimal::new(12_345, 3)), Decimal::new(1_235, 2));
        assert_eq!(round_currency(Decimal::new(12_344, 3)), Decimal::new(1_234, 2));
        assert_eq!(round_currency(Decimal::new(-12_345, 3)), Decimal::new(-1_235, 2));
    }

    #[test]
    fn test_tier_discount_lookup() {
        let tiers = TierDiscounts::default();
        assert_eq!(tier_discount(&tiers, MembershipTier::Gold), Decimal::from(8));
        assert_eq!(tier_discount(&tiers, MembershipTier::None), Decimal::ZERO);
    }
}
