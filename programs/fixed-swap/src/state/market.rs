use anchor_lang::prelude::*;

use crate::error::SwapError;

/// Fixed-price market for one ordered token pair.
///
/// The struct name feeds the account discriminator, so it must stay
/// `MarketAccount` for existing market records to deserialize.
#[account]
#[derive(InitSpace)]
pub struct MarketAccount {
    /// Account allowed to reprice the market
    pub authority: Pubkey,

    /// Base token mint (input of an A -> B swap)
    pub token_mint_a: Pubkey,

    /// Quote token mint
    pub token_mint_b: Pubkey,

    /// Units of B paid per unit of A, in raw token units
    pub price: u64,

    /// Decimals of mint A, checked against the mint at init
    pub decimals_a: u8,

    /// Decimals of mint B, checked against the mint at init
    pub decimals_b: u8,

    /// PDA bump for the market account
    pub bump: u8,
}

/// Arguments of `initialize_market`, validated before the record is written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketParams {
    pub price: u64,
    pub decimals_a: u8,
    pub decimals_b: u8,
    pub bump: u8,
}

impl MarketParams {
    /// Validate price and declared decimals against the mints
    pub fn validate(&self, mint_a_decimals: u8, mint_b_decimals: u8) -> Result<()> {
        MarketAccount::validate_price(self.price)?;

        require!(
            self.decimals_a == mint_a_decimals,
            SwapError::DecimalsMismatch
        );
        require!(
            self.decimals_b == mint_b_decimals,
            SwapError::DecimalsMismatch
        );

        Ok(())
    }
}

impl MarketAccount {
    /// A zeroed account has no price, a written one always has
    pub fn is_initialized(&self) -> bool {
        self.price > 0
    }

    pub fn validate_price(price: u64) -> Result<()> {
        require!(price > 0, SwapError::InvalidPrice);
        Ok(())
    }

    /// Check if given key is the market authority
    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }

    /// Write every field of a fresh market record
    pub fn init(
        &mut self,
        authority: Pubkey,
        token_mint_a: Pubkey,
        token_mint_b: Pubkey,
        params: MarketParams,
    ) -> Result<()> {
        require!(!self.is_initialized(), SwapError::AlreadyInitialized);
        Self::validate_price(params.price)?;

        self.authority = authority;
        self.token_mint_a = token_mint_a;
        self.token_mint_b = token_mint_b;
        self.price = params.price;
        self.decimals_a = params.decimals_a;
        self.decimals_b = params.decimals_b;
        self.bump = params.bump;

        Ok(())
    }

    /// Replace the price, returning the previous one
    pub fn update_price(&mut self, price: u64) -> Result<u64> {
        Self::validate_price(price)?;
        let old_price = self.price;
        self.price = price;
        Ok(old_price)
    }
}
