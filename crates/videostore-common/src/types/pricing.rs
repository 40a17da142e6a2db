//! Pricing Policy - Charge = Base + Extra Days × Day Rate
//!
//! Each category is priced by a flat base covering a number of included
//! days, plus a per-day rate for every day beyond them:
//!
//! | Category    | Base | Included days | Per extra day |
//! |-------------|------|---------------|---------------|
//! | Regular     | 2.0  | 2             | 1.5           |
//! | New release | 0.0  | 0             | 3.0           |
//! | Childrens   | 1.5  | 3             | 1.5           |
//!
//! Charges are rounded to [`CURRENCY_SCALE`] digits before they leave this
//! module, so statement totals are exact sums of the rendered lines.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::movie::MovieCategory;
use crate::error::ConfigError;
use crate::{CURRENCY_SCALE, MAX_RENTAL_CHARGE};

/// Rate card for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRate {
    /// Flat amount charged for any rental
    pub base: Decimal,
    /// Days covered by the base amount
    pub included_days: u32,
    /// Amount added per day beyond `included_days`
    pub extra_day: Decimal,
}

impl CategoryRate {
    pub const fn new(base: Decimal, included_days: u32, extra_day: Decimal) -> Self {
        Self {
            base,
            included_days,
            extra_day,
        }
    }

    /// Charge for the longest representable rental, or `None` on overflow
    pub fn largest_amount(&self) -> Option<Decimal> {
        Decimal::from(u32::MAX.saturating_sub(self.included_days))
            .checked_mul(self.extra_day)
            .and_then(|extra| extra.checked_add(self.base))
    }

    /// Charge for `days_rented` days under this rate, before rounding
    pub fn amount(&self, days_rented: u32) -> Decimal {
        let extra_days = days_rented.saturating_sub(self.included_days);
        self.base + Decimal::from(extra_days) * self.extra_day
    }
}

/// Maps (category, days rented) to a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub regular: CategoryRate,
    pub new_release: CategoryRate,
    pub childrens: CategoryRate,
}

impl PricingPolicy {
    /// The store's standard rate card
    pub fn standard() -> Self {
        Self {
            regular: CategoryRate::new(Decimal::new(20, 1), 2, Decimal::new(15, 1)),
            new_release: CategoryRate::new(Decimal::new(0, 1), 0, Decimal::new(30, 1)),
            childrens: CategoryRate::new(Decimal::new(15, 1), 3, Decimal::new(15, 1)),
        }
    }

    /// Rate card for a category
    pub fn rate_for(&self, category: MovieCategory) -> &CategoryRate {
        match category {
            MovieCategory::Regular => &self.regular,
            MovieCategory::NewRelease => &self.new_release,
            MovieCategory::Childrens => &self.childrens,
        }
    }

    /// Charge for renting a movie of `category` for `days_rented` days.
    ///
    /// Rates must pass [`PricingPolicy::validate`]; an unchecked rate card
    /// can overflow `Decimal`.
    pub fn charge(&self, category: MovieCategory, days_rented: u32) -> Decimal {
        self.rate_for(category)
            .amount(days_rented)
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Reject negative amounts and rates whose charge can pass
    /// [`MAX_RENTAL_CHARGE`]. A valid rate card never panics, yields
    /// non-negative charges, and never gets cheaper as the rental gets longer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in MovieCategory::ALL {
            let rate = self.rate_for(category);
            for (field, value) in [("base", rate.base), ("extra_day", rate.extra_day)] {
                if value < Decimal::ZERO {
                    return Err(ConfigError::NegativeRate {
                        category: category.to_string(),
                        field,
                        value: value.to_string(),
                    });
                }
            }

            match rate.largest_amount() {
                Some(largest) if largest <= MAX_RENTAL_CHARGE => {}
                _ => {
                    return Err(ConfigError::RateTooLarge {
                        category: category.to_string(),
                        field: if rate.base > MAX_RENTAL_CHARGE { "base" } else { "extra_day" },
                        maximum: MAX_RENTAL_CHARGE.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Charge under the standard rate card
pub fn charge(category: MovieCategory, days_rented: u32) -> Decimal {
    PricingPolicy::standard().charge(category, days_rented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_rates_match_rate_card() {
        let policy = PricingPolicy::standard();
        assert_eq!(policy.regular, CategoryRate::new(dec!(2.0), 2, dec!(1.5)));
        assert_eq!(policy.new_release, CategoryRate::new(dec!(0.0), 0, dec!(3.0)));
        assert_eq!(policy.childrens, CategoryRate::new(dec!(1.5), 3, dec!(1.5)));
    }

    #[test]
    fn test_regular_pricing() {
        assert_eq!(charge(MovieCategory::Regular, 1), dec!(2.0));
        // Threshold is inclusive: no surcharge on day 2
        assert_eq!(charge(MovieCategory::Regular, 2), dec!(2.0));
        assert_eq!(charge(MovieCategory::Regular, 3), dec!(3.5));
        // 2.0 + 8 * 1.5
        assert_eq!(charge(MovieCategory::Regular, 10), dec!(14.0));
    }

    #[test]
    fn test_new_release_pricing() {
        assert_eq!(charge(MovieCategory::NewRelease, 1), dec!(3.0));
        assert_eq!(charge(MovieCategory::NewRelease, 2), dec!(6.0));
        assert_eq!(charge(MovieCategory::NewRelease, 4), dec!(12.0));
    }

    #[test]
    fn test_childrens_pricing() {
        assert_eq!(charge(MovieCategory::Childrens, 1), dec!(1.5));
        assert_eq!(charge(MovieCategory::Childrens, 3), dec!(1.5));
        // 1.5 + 2 * 1.5
        assert_eq!(charge(MovieCategory::Childrens, 5), dec!(4.5));
    }

    #[test]
    fn test_charge_rounds_to_currency_scale() {
        let policy = PricingPolicy {
            regular: CategoryRate::new(dec!(1.00), 0, dec!(0.25)),
            ..PricingPolicy::standard()
        };
        // 1.00 + 0.25 = 1.25 -> 1.3
        assert_eq!(policy.charge(MovieCategory::Regular, 1), dec!(1.3));
        // 1.00 + 0.50 = 1.50
        assert_eq!(policy.charge(MovieCategory::Regular, 2), dec!(1.5));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let policy = PricingPolicy {
            childrens: CategoryRate::new(dec!(1.5), 3, dec!(-0.5)),
            ..PricingPolicy::standard()
        };
        assert_eq!(
            policy.validate(),
            Err(ConfigError::NegativeRate {
                category: "childrens".to_string(),
                field: "extra_day",
                value: "-0.5".to_string(),
            })
        );
        assert!(PricingPolicy::standard().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_rate() {
        let policy = PricingPolicy {
            regular: CategoryRate::new(dec!(1.0), 0, dec!(50000000000000000000000000000)),
            ..PricingPolicy::standard()
        };
        assert_eq!(policy.regular.largest_amount(), None);
        assert_eq!(
            policy.validate(),
            Err(ConfigError::RateTooLarge {
                category: "regular".to_string(),
                field: "extra_day",
                maximum: "1000000000000000".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_bounds_longest_rental() {
        // u32::MAX * 1_000_000 passes the limit, u32::MAX * 100_000 does not
        let too_steep = PricingPolicy {
            new_release: CategoryRate::new(dec!(0), 0, dec!(1000000)),
            ..PricingPolicy::standard()
        };
        assert!(matches!(
            too_steep.validate(),
            Err(ConfigError::RateTooLarge { field: "extra_day", .. })
        ));

        let steep = PricingPolicy {
            new_release: CategoryRate::new(dec!(0), 0, dec!(100000)),
            ..PricingPolicy::standard()
        };
        assert!(steep.validate().is_ok());
        assert_eq!(steep.charge(MovieCategory::NewRelease, u32::MAX), dec!(429496729500000));

        let huge_base = PricingPolicy {
            childrens: CategoryRate::new(dec!(2000000000000000), 3, dec!(1.5)),
            ..PricingPolicy::standard()
        };
        assert!(matches!(
            huge_base.validate(),
            Err(ConfigError::RateTooLarge { field: "base", .. })
        ));
    }

    #[test]
    fn test_max_rental_charge() {
        assert_eq!(MAX_RENTAL_CHARGE, dec!(1000000000000000));
    }

    fn any_category() -> impl Strategy<Value = MovieCategory> {
        prop_oneof![
            Just(MovieCategory::Regular),
            Just(MovieCategory::NewRelease),
            Just(MovieCategory::Childrens),
        ]
    }

    proptest! {
        #[test]
        fn prop_charge_is_non_negative(category in any_category(), days in 1u32..10_000) {
            prop_assert!(charge(category, days) >= Decimal::ZERO);
        }

        #[test]
        fn prop_charge_never_decreases_with_days(category in any_category(), days in 1u32..10_000) {
            prop_assert!(charge(category, days + 1) >= charge(category, days));
        }
    }
}
