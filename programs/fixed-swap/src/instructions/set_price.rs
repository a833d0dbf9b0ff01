use crate::{constants::*, error::SwapError, events::PriceUpdated, state::MarketAccount};
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

#[derive(Accounts)]
pub struct SetPrice<'info> {
    /// Market authority
    pub authority: Signer<'info>,

    /// Base token mint
    pub token_mint_a: Account<'info, Mint>,

    /// Quote token mint
    pub token_mint_b: Account<'info, Mint>,

    /// Market to reprice
    #[account(
        mut,
        seeds = [MARKET_SEED.as_bytes(), token_mint_a.key().as_ref(), token_mint_b.key().as_ref()],
        bump = market.bump,
        has_one = token_mint_a @ SwapError::InvalidAccountOwnership,
        has_one = token_mint_b @ SwapError::InvalidAccountOwnership,
        constraint = market.is_authority(&authority.key()) @ SwapError::Unauthorized,
    )]
    pub market: Account<'info, MarketAccount>,
}

/// Handler function for repricing a market
pub fn set_price_handler(ctx: Context<SetPrice>, price: u64) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let old_price = market.update_price(price)?;

    msg!("Price updated: {} -> {}", old_price, price);

    emit!(PriceUpdated {
        market: market.key(),
        old_price,
        new_price: price,
    });

    Ok(())
}
