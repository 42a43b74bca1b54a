//! Stake sizing for a two-way arbitrage.
//!
//! Staking each side in proportion to its implied probability makes the
//! payout identical whichever side wins.

use rust_decimal::Decimal;
use serde::Serialize;

/// Share of the bankroll to place on each leg, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StakeSplit {
    pub first_pct: Decimal,
    pub second_pct: Decimal,
    /// Sum of both implied probabilities; below one for a real arbitrage.
    #[serde(skip)]
    combined_probability: Decimal,
}

/// Split a bankroll across two legs given their decimal odds.
///
/// Both inputs must be greater than one, which every `AmericanOdds` conversion
/// guarantees.
#[must_use]
pub fn stake_split(first_decimal: Decimal, second_decimal: Decimal) -> StakeSplit {
    let p1 = Decimal::ONE / first_decimal;
    let p2 = Decimal::ONE / second_decimal;
    let total = p1 + p2;
    StakeSplit {
        first_pct: p1 / total * Decimal::ONE_HUNDRED,
        second_pct: p2 / total * Decimal::ONE_HUNDRED,
        combined_probability: total,
    }
}

impl StakeSplit {
    /// Currency amounts for a bankroll, rounded to cents.
    ///
    /// `None` when the bankroll is not positive or the amounts overflow.
    #[must_use]
    pub fn amounts(&self, bankroll: Decimal) -> Option<(Decimal, Decimal)> {
        if bankroll <= Decimal::ZERO {
            return None;
        }
        let share = |pct: Decimal| {
            bankroll
                .checked_mul(pct)?
                .checked_div(Decimal::ONE_HUNDRED)
                .map(|amount| amount.round_dp(2))
        };
        Some((share(self.first_pct)?, share(self.second_pct)?))
    }

    /// Payout returned by either winning leg when the full bankroll is staked.
    #[must_use]
    pub fn guaranteed_return(&self, bankroll: Decimal) -> Option<Decimal> {
        if bankroll <= Decimal::ZERO {
            return None;
        }
        bankroll
            .checked_div(self.combined_probability)
            .map(|payout| payout.round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn even_odds_split_evenly() {
        let split = stake_split(dec!(2), dec!(2));
        assert_eq!(split.first_pct, dec!(50));
        assert_eq!(split.second_pct, dec!(50));
    }

    #[test]
    fn shorter_price_takes_larger_stake() {
        // +105 / +102
        let split = stake_split(dec!(2.05), dec!(2.02));
        assert_eq!(split.first_pct.round_dp(2), dec!(49.63));
        assert_eq!(split.second_pct.round_dp(2), dec!(50.37));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let split = stake_split(dec!(1.9090909090909090909090909091), dec!(2.3));
        let sum = split.first_pct + split.second_pct;
        assert!((sum - dec!(100)).abs() < dec!(0.000001), "sum was {sum}");
        assert!(split.first_pct > Decimal::ZERO && split.first_pct < dec!(100));
        assert!(split.second_pct > Decimal::ZERO && split.second_pct < dec!(100));
    }

    #[test]
    fn payout_is_equal_on_both_legs() {
        let split = stake_split(dec!(2.05), dec!(2.02));
        let (first, second) = split.amounts(dec!(1000)).unwrap();
        let first_payout = first * dec!(2.05);
        let second_payout = second * dec!(2.02);
        assert!((first_payout - second_payout).abs() < dec!(0.05));
        assert_eq!(split.guaranteed_return(dec!(1000)), Some(dec!(1017.44)));
    }

    #[test]
    fn non_positive_bankroll_has_no_amounts() {
        let split = stake_split(dec!(2.05), dec!(2.02));
        assert_eq!(split.amounts(Decimal::ZERO), None);
        assert_eq!(split.amounts(dec!(-50)), None);
        assert_eq!(split.guaranteed_return(dec!(-50)), None);
    }

    #[test]
    fn overflowing_bankroll_has_no_amounts() {
        let split = stake_split(dec!(2.05), dec!(2.02));
        assert_eq!(split.amounts(Decimal::MAX), None);
        assert_eq!(split.guaranteed_return(Decimal::MAX), None);
    }
}
