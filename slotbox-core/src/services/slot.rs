//! Slot game service - randomized wager settlement

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::SpinOutcome;

/// Upper bound of the losing band
const LOSS_CEILING: f64 = 0.5;
/// Lower bound of the major-win band
const MAJOR_WIN_FLOOR: f64 = 0.9;

/// The outcome engine: maps a wager to a win/loss result
///
/// Each spin is an independent trial over a fixed three-tier
/// distribution: 50% loss, 40% minor win paying x[1,2), 10% major win
/// paying x[2,10). No state is kept between spins beyond the RNG.
pub struct SlotGame {
    rng: StdRng,
}

impl SlotGame {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Settle one wager
    pub fn spin(&mut self, bet: Decimal) -> Result<SpinOutcome> {
        if bet <= Decimal::ZERO {
            return Err(Error::InvalidBet(bet));
        }

        let probability: f64 = self.rng.gen();
        if probability < LOSS_CEILING {
            return Ok(SpinOutcome::loss());
        }

        let spread: f64 = self.rng.gen();
        let multiplier = if probability < MAJOR_WIN_FLOOR {
            1.0 + spread
        } else {
            2.0 + 8.0 * spread
        };
        // Finite and inside [1, 10) by construction
        let multiplier = Decimal::from_f64(multiplier).expect("multiplier is finite");

        let payout = bet.checked_mul(multiplier).ok_or(Error::Overflow)?;
        Ok(SpinOutcome::win(payout))
    }
}

impl Default for SlotGame {
    fn default() -> Self {
        Self::new()
    }
}
