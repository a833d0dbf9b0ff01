use anchor_lang::prelude::*;

#[event]
pub struct MarketInitialized {
    pub market: Pubkey,
    pub authority: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub price: u64,
    pub decimals_a: u8,
    pub decimals_b: u8,
}

#[event]
pub struct PriceUpdated {
    pub market: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct LiquidityAdded {
    pub market: Pubkey,
    pub provider: Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
}

#[event]
pub struct Swapped {
    pub market: Pubkey,
    pub user: Pubkey,
    pub a_to_b: bool,
    pub price: u64,
    pub amount_in: u64,
    pub amount_out: u64,
    /// Input left in the vault by a rounded-down B -> A swap
    pub remainder: u64,
}
