//! Wallet service - per-user balance ledger

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::Withdrawal;

/// Balance ledger: one entry per authenticated user id
///
/// Entries live for the process lifetime and are only ever mutated
/// through the operations below. Deposit and withdraw keep balances
/// non-negative; `adjust` is the raw settlement primitive and trusts
/// its caller to have checked funds for debits.
#[derive(Debug, Default)]
pub struct WalletService {
    wallets: HashMap<Uuid, Decimal>,
}

impl WalletService {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)initialize the wallet for this user to a zero balance
    ///
    /// Idempotent by overwrite; there is no error condition.
    pub fn create_wallet(&mut self, user_id: Uuid) {
        self.wallets.insert(user_id, Decimal::ZERO);
    }

    /// Add a positive amount; returns the new balance
    pub fn deposit(&mut self, user_id: Uuid, amount: Decimal) -> Result<Decimal> {
        Self::validate_amount(amount)?;

        let balance = self.entry_mut(user_id)?;
        *balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
        Ok(*balance)
    }

    /// Subtract a positive amount, refusing to overdraw
    ///
    /// Overdrawing is an expected business outcome reported through
    /// `Withdrawal::InsufficientFunds`, with the balance unchanged.
    pub fn withdraw(&mut self, user_id: Uuid, amount: Decimal) -> Result<Withdrawal> {
        Self::validate_amount(amount)?;

        let balance = self.entry_mut(user_id)?;
        // Compare instead of subtracting so an extreme balance can
        // never overflow inside the sufficiency check
        if *balance < amount {
            return Ok(Withdrawal::InsufficientFunds { balance: *balance });
        }

        *balance -= amount;
        Ok(Withdrawal::Completed { balance: *balance })
    }

    /// Apply a signed settlement delta unconditionally
    ///
    /// This is the primitive that charges a wager and pays out a win.
    /// It performs no non-negativity check; a debit must be preceded by
    /// a balance-sufficiency check at the call site.
    pub fn adjust(&mut self, user_id: Uuid, delta: Decimal) -> Result<Decimal> {
        let balance = self.entry_mut(user_id)?;
        *balance = balance.checked_add(delta).ok_or(Error::Overflow)?;
        Ok(*balance)
    }

    /// Current balance for this user
    pub fn balance(&self, user_id: Uuid) -> Result<Decimal> {
        self.wallets
            .get(&user_id)
            .copied()
            .ok_or(Error::WalletNotFound(user_id))
    }

    fn entry_mut(&mut self, user_id: Uuid) -> Result<&mut Decimal> {
        self.wallets
            .get_mut(&user_id)
            .ok_or(Error::WalletNotFound(user_id))
    }

    fn validate_amount(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        Ok(())
    }
}
