//! Wager outcome domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of one settled wager
///
/// Transient value produced by the slot game; never stored. A loss
/// always carries amount zero, a win a strictly positive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub won: bool,
    pub amount: Decimal,
}

impl SpinOutcome {
    pub fn loss() -> Self {
        Self {
            won: false,
            amount: Decimal::ZERO,
        }
    }

    pub fn win(amount: Decimal) -> Self {
        Self { won: true, amount }
    }
}
