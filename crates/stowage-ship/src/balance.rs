//! Left/right balance policy.

use crate::error::ShipError;

/// How far the two sides of a ship may diverge.
///
/// A ship is balanced when the difference between its left and right
/// side weights is at most `tolerance_percent` of its total cargo weight
/// (the middle column of an odd-width ship counts toward the total but
/// toward neither side).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalancePolicy {
    /// Allowed left/right difference as a percentage of total cargo
    /// weight. Default: 20. Must be `<= 100`.
    pub tolerance_percent: u8,
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self {
            tolerance_percent: 20,
        }
    }
}

impl BalancePolicy {
    /// Reject percentages above 100.
    pub fn validate(&self) -> Result<(), ShipError> {
        if self.tolerance_percent > 100 {
            return Err(ShipError::InvalidTolerance {
                value: self.tolerance_percent,
            });
        }
        Ok(())
    }

    /// Whether `left` and `right` are within tolerance of `total`.
    ///
    /// An empty ship (`total == 0`) is balanced.
    pub fn is_balanced(&self, left: u64, right: u64, total: u64) -> bool {
        let diff = u128::from(left.abs_diff(right));
        diff * 100 <= u128::from(self.tolerance_percent) * u128::from(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_ship_is_balanced() {
        assert!(BalancePolicy::default().is_balanced(0, 0, 0));
    }

    #[test]
    fn boundary_is_inclusive() {
        let p = BalancePolicy::default();
        // 20% of 100 is 20.
        assert!(p.is_balanced(60, 40, 100));
        assert!(!p.is_balanced(61, 39, 100));
    }

    #[test]
    fn middle_weight_widens_the_margin() {
        let p = BalancePolicy::default();
        assert!(!p.is_balanced(30, 0, 30));
        assert!(p.is_balanced(30, 0, 150));
    }

    #[test]
    fn tolerance_above_hundred_rejected() {
        let p = BalancePolicy {
            tolerance_percent: 101,
        };
        assert_eq!(p.validate(), Err(ShipError::InvalidTolerance { value: 101 }));
        assert!(BalancePolicy::default().validate().is_ok());
    }

    proptest! {
        #[test]
        fn balance_is_symmetric(left in 0u64..1_000_000, right in 0u64..1_000_000, tol in 0u8..=100) {
            let p = BalancePolicy { tolerance_percent: tol };
            let total = left + right;
            prop_assert_eq!(p.is_balanced(left, right, total), p.is_balanced(right, left, total));
        }

        #[test]
        fn equal_sides_always_balanced(side in 0u64..1_000_000, middle in 0u64..1_000_000, tol in 0u8..=100) {
            let p = BalancePolicy { tolerance_percent: tol };
            prop_assert!(p.is_balanced(side, side, 2 * side + middle));
        }
    }
}
