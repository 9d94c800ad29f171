//! Cash ledger and passive income.
//!
//! Income accrues continuously: every sub-step pays `rate × dt`, so cash is
//! fractional internally and floored only for display.

use bulwark_core::config::Tuning;
use bulwark_core::errors::CommandError;

/// The player's single cash balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    cash: f64,
    base_income_per_sec: f64,
    depot_income_bonus: f64,
}

impl Economy {
    pub fn new(starting_cash: f64, tuning: &Tuning) -> Self {
        Self {
            cash: sanitize(starting_cash),
            base_income_per_sec: sanitize(tuning.base_income_per_sec),
            depot_income_bonus: sanitize(tuning.depot_income_bonus),
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Cash rounded down to whole units.
    pub fn display_cash(&self) -> u64 {
        self.cash.floor() as u64
    }

    /// Income per second with `depot_count` resource depots standing.
    pub fn income_rate(&self, depot_count: usize) -> f64 {
        self.base_income_per_sec * (1.0 + self.depot_income_bonus * depot_count as f64)
    }

    /// Pay `dt` seconds of income. Returns the amount paid.
    pub fn apply_income(&mut self, dt: f64, depot_count: usize) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        let income = self.income_rate(depot_count) * dt;
        self.cash += income;
        income
    }

    pub fn can_afford(&self, amount: f64) -> bool {
        amount.is_finite() && self.cash >= amount
    }

    /// Debit `amount`, or fail without touching the balance.
    pub fn spend(&mut self, amount: f64) -> Result<(), CommandError> {
        if !self.can_afford(amount) {
            return Err(CommandError::InsufficientFunds {
                needed: amount,
                available: self.cash,
            });
        }
        self.cash -= amount.max(0.0);
        Ok(())
    }

    /// Add cash. Negative or non-finite amounts are ignored.
    pub fn credit(&mut self, amount: f64) {
        self.cash += sanitize(amount);
    }
}

fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() {
        amount.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy(cash: f64) -> Economy {
        Economy::new(cash, &Tuning::default())
    }

    #[test]
    fn test_spend_and_reject() {
        let mut eco = economy(2000.0);
        eco.spend(400.0).unwrap();
        assert_eq!(eco.cash(), 1600.0);

        let err = eco.spend(5000.0).unwrap_err();
        assert!(matches!(
            err,
            CommandError::InsufficientFunds { needed, available }
                if needed == 5000.0 && available == 1600.0
        ));
        assert_eq!(eco.cash(), 1600.0, "failed spend must not mutate");

        // Spending exactly the balance is allowed.
        eco.spend(1600.0).unwrap();
        assert_eq!(eco.cash(), 0.0);
    }

    #[test]
    fn test_cash_never_negative() {
        let mut eco = economy(100.0);
        let amounts = [30.0, -50.0, 80.0, f64::NAN, 70.0, 10.0, f64::INFINITY, 0.5];
        for (i, amount) in amounts.iter().enumerate() {
            if i % 2 == 0 {
                let _ = eco.spend(*amount);
            } else {
                eco.credit(*amount);
            }
            assert!(eco.cash() >= 0.0, "cash went negative after step {i}");
            assert!(eco.cash().is_finite());
        }
    }

    #[test]
    fn test_income_base_rate() {
        let mut eco = economy(0.0);
        // One reference interval with no depots pays 25.
        let paid = eco.apply_income(3.0, 0);
        assert!((paid - 25.0).abs() < 1e-9);
        assert_eq!(eco.display_cash(), 25);
    }

    #[test]
    fn test_income_depot_bonus() {
        let mut eco = economy(0.0);
        // Two depots: 25 * 1.5 per 3 seconds.
        for _ in 0..30 {
            eco.apply_income(0.1, 2);
        }
        assert!((eco.cash() - 37.5).abs() < 1e-9);
        assert_eq!(eco.display_cash(), 37);
    }

    #[test]
    fn test_income_ignores_bad_dt() {
        let mut eco = economy(10.0);
        assert_eq!(eco.apply_income(-1.0, 0), 0.0);
        assert_eq!(eco.apply_income(f64::NAN, 0), 0.0);
        assert_eq!(eco.cash(), 10.0);
    }

    #[test]
    fn test_display_floors() {
        let mut eco = economy(0.0);
        eco.credit(412.99);
        assert_eq!(eco.display_cash(), 412);
    }
}
