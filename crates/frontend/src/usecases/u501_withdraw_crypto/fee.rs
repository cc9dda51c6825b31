use contracts::domain::a004_withdraw::WithdrawFee;
use contracts::shared::money::money_round;

/// Fee and total shown under the amount field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeBreakdown {
    pub fee_size: f64,
    pub total_amount: f64,
}

impl FeeBreakdown {
    /// Equal to the balance is allowed; a non-number total never passes
    pub fn exceeds(&self, balance: f64) -> bool {
        self.total_amount.is_nan() || self.total_amount > balance
    }
}

/// Fee and total for `amount`, both rounded to the asset accuracy.
///
/// Pure; callers recompute on every amount or quote change.
pub fn compute_fee(quote: &WithdrawFee, amount: f64, accuracy: u32) -> FeeBreakdown {
    let fee_size = money_round(quote.fee_for(amount), accuracy);
    let total_amount = money_round(amount + fee_size, accuracy);
    FeeBreakdown {
        fee_size,
        total_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute(fee: f64) -> WithdrawFee {
        WithdrawFee {
            absolute_fee: fee,
            relative_fee: 0.0,
        }
    }

    #[test]
    fn test_absolute_fee_breakdown() {
        let breakdown = compute_fee(&absolute(0.0001), 100.0, 8);
        assert_eq!(breakdown.fee_size, 0.0001);
        assert_eq!(breakdown.total_amount, 100.0001);
        assert!(!breakdown.exceeds(300.0));
    }

    #[test]
    fn test_total_equal_to_balance_passes() {
        let breakdown = compute_fee(&absolute(0.0001), 299.9999, 8);
        assert_eq!(breakdown.total_amount, 300.0);
        assert!(!breakdown.exceeds(300.0));

        let over = compute_fee(&absolute(0.0001), 300.0, 8);
        assert_eq!(over.total_amount, 300.0001);
        assert!(over.exceeds(300.0));
    }

    #[test]
    fn test_non_number_total_exceeds_any_balance() {
        let quote = WithdrawFee {
            absolute_fee: f64::NAN,
            relative_fee: 0.0,
        };
        let breakdown = compute_fee(&quote, 1.0, 400);
        assert!(breakdown.exceeds(1_000_000.0));
    }

    #[test]
    fn test_relative_fee_rounded_to_accuracy() {
        let quote = WithdrawFee {
            absolute_fee: 0.0,
            relative_fee: 0.001,
        };
        let breakdown = compute_fee(&quote, 12.3456, 2);
        assert_eq!(breakdown.fee_size, 0.01);
        assert_eq!(breakdown.total_amount, 12.36);
    }

    #[test]
    fn test_results_have_at_most_accuracy_digits() {
        let quote = WithdrawFee {
            absolute_fee: 0.0,
            relative_fee: 0.0037,
        };
        for accuracy in 0..=8u32 {
            let breakdown = compute_fee(&quote, 1234.567_891_23, accuracy);
            for value in [breakdown.fee_size, breakdown.total_amount] {
                let scaled = value * 10f64.powi(accuracy as i32);
                assert!(
                    (scaled - scaled.round()).abs() < 1e-6,
                    "{} not rounded to {} digits",
                    value,
                    accuracy
                );
            }
        }
    }
}
