//! Wallet domain models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a withdrawal request
///
/// Running out of funds is an expected business outcome, not a fault,
/// so it is part of the success type rather than the error type. Both
/// variants carry the balance after the operation (unchanged for
/// `InsufficientFunds`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Withdrawal {
    Completed { balance: Decimal },
    InsufficientFunds { balance: Decimal },
}

impl Withdrawal {
    pub fn is_completed(&self) -> bool {
        matches!(self, Withdrawal::Completed { .. })
    }

    pub fn balance(&self) -> Decimal {
        match self {
            Withdrawal::Completed { balance } | Withdrawal::InsufficientFunds { balance } => {
                *balance
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdrawal_balance_access() {
        let done = Withdrawal::Completed {
            balance: Decimal::new(6000, 2),
        };
        assert!(done.is_completed());
        assert_eq!(done.balance(), Decimal::new(6000, 2));

        let short = Withdrawal::InsufficientFunds {
            balance: Decimal::new(10000, 2),
        };
        assert!(!short.is_completed());
        assert_eq!(short.balance(), Decimal::new(10000, 2));
    }
}
