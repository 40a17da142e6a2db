//! Frequent renter points
//!
//! Every rental earns the base points. A new release kept longer than
//! `bonus_after_days` earns the bonus on top; a one-day new release does not.

use serde::{Deserialize, Serialize};

use super::movie::MovieCategory;

/// Maps (category, days rented) to frequent renter points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoyaltyPolicy {
    /// Points earned by every rental
    pub base_points: u32,
    /// Extra points for a new release rented past `bonus_after_days`
    pub new_release_bonus: u32,
    /// Bonus requires strictly more days than this
    pub bonus_after_days: u32,
}

impl LoyaltyPolicy {
    pub const fn standard() -> Self {
        Self {
            base_points: 1,
            new_release_bonus: 1,
            bonus_after_days: 1,
        }
    }

    pub fn points(&self, category: MovieCategory, days_rented: u32) -> u32 {
        match category {
            MovieCategory::NewRelease if days_rented > self.bonus_after_days => {
                self.base_points.saturating_add(self.new_release_bonus)
            }
            MovieCategory::Regular | MovieCategory::NewRelease | MovieCategory::Childrens => {
                self.base_points
            }
        }
    }
}

impl Default for LoyaltyPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Points under the standard loyalty policy
pub fn points(category: MovieCategory, days_rented: u32) -> u32 {
    LoyaltyPolicy::standard().points(category, days_rented)
}
