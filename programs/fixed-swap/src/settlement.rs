//! Balance checks for the token movements of one instruction.
//!
//! Every fund-moving instruction builds a [`Settlement`] from the balances
//! it read and verifies all of its legs before the first token CPI, so an
//! underfunded or overflowing leg rejects the instruction without any
//! transfer being issued.

use anchor_lang::prelude::*;

use crate::error::SwapError;

/// Who funds a leg; picks the error an underfunded source reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Funder {
    /// Signer owned token account
    User,
    /// Market custody account
    Vault,
}

/// One token transfer, as seen through the balances it touches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferLeg {
    pub funder: Funder,
    pub source_balance: u64,
    pub destination_balance: u64,
    pub amount: u64,
}

/// Balances after a leg is applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettledLeg {
    pub source_balance: u64,
    pub destination_balance: u64,
}

impl TransferLeg {
    /// User account -> vault
    pub fn deposit(source_balance: u64, destination_balance: u64, amount: u64) -> Self {
        Self {
            funder: Funder::User,
            source_balance,
            destination_balance,
            amount,
        }
    }

    /// Vault -> user account
    pub fn payout(source_balance: u64, destination_balance: u64, amount: u64) -> Self {
        Self {
            funder: Funder::Vault,
            source_balance,
            destination_balance,
            amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    pub fn settle(&self) -> Result<SettledLeg> {
        let shortfall = match self.funder {
            Funder::User => SwapError::InsufficientBalance,
            Funder::Vault => SwapError::InsufficientLiquidity,
        };

        let source_balance = self.source_balance.checked_sub(self.amount).ok_or(shortfall)?;
        let destination_balance = self
            .destination_balance
            .checked_add(self.amount)
            .ok_or(SwapError::Overflow)?;

        Ok(SettledLeg {
            source_balance,
            destination_balance,
        })
    }
}

/// The two legs of an add-liquidity or swap, accepted or rejected together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    legs: [TransferLeg; 2],
}

impl Settlement {
    pub fn new(first: TransferLeg, second: TransferLeg) -> Self {
        Self {
            legs: [first, second],
        }
    }

    pub fn legs(&self) -> &[TransferLeg; 2] {
        &self.legs
    }

    /// Settle every leg; the first failing leg rejects the whole set
    pub fn verify(&self) -> Result<[SettledLeg; 2]> {
        let [first, second] = &self.legs;
        Ok([first.settle()?, second.settle()?])
    }
}
