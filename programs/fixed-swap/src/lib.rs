#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod settlement;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("C3RC2picGe1SRyYNny7bVWCtVc5qizqd7XBMErby2J6V");

#[program]
pub mod fixed_swap {
    use super::*;

    /// Create the market record and its two vaults
    pub fn initialize_market(
        ctx: Context<InitializeMarket>,
        price: u64,
        decimals_a: u8,
        decimals_b: u8,
        bump: u8,
    ) -> Result<()> {
        instructions::initialize::initialize_handler(ctx, price, decimals_a, decimals_b, bump)
    }

    /// Reprice the market (authority only)
    pub fn set_price(ctx: Context<SetPrice>, price: u64) -> Result<()> {
        instructions::set_price::set_price_handler(ctx, price)
    }

    /// Deposit tokens into both vaults
    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
        instructions::add_liquidity::add_liquidity_handler(ctx, amount_a, amount_b)
    }

    /// Swap `amount` of the input token at the fixed price
    pub fn swap(ctx: Context<Swap>, amount: u64, a_to_b: bool) -> Result<()> {
        instructions::swap::swap_handler(ctx, amount, a_to_b)
    }
}
