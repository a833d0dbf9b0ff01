use crate::{
    constants::*,
    error::SwapError,
    events::Swapped,
    math::{quote, Quote, SwapDirection},
    settlement::{Settlement, TransferLeg},
    state::MarketAccount,
};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Swap<'info> {
    /// User performing the swap
    pub user: Signer<'info>,

    /// Base token mint
    pub token_mint_a: Account<'info, Mint>,

    /// Quote token mint
    pub token_mint_b: Account<'info, Mint>,

    /// Market record, read only
    #[account(
        seeds = [MARKET_SEED.as_bytes(), token_mint_a.key().as_ref(), token_mint_b.key().as_ref()],
        bump = market.bump,
        has_one = token_mint_a @ SwapError::InvalidAccountOwnership,
        has_one = token_mint_b @ SwapError::InvalidAccountOwnership,
    )]
    pub market: Account<'info, MarketAccount>,

    /// Vault for token A
    #[account(
        mut,
        seeds = [VAULT_A_SEED.as_bytes(), market.key().as_ref()],
        bump,
        constraint = vault_a.mint == market.token_mint_a @ SwapError::InvalidAccountOwnership,
        constraint = vault_a.owner == market.key() @ SwapError::InvalidAccountOwnership,
    )]
    pub vault_a: Account<'info, TokenAccount>,

    /// Vault for token B
    #[account(
        mut,
        seeds = [VAULT_B_SEED.as_bytes(), market.key().as_ref()],
        bump,
        constraint = vault_b.mint == market.token_mint_b @ SwapError::InvalidAccountOwnership,
        constraint = vault_b.owner == market.key() @ SwapError::InvalidAccountOwnership,
    )]
    pub vault_b: Account<'info, TokenAccount>,

    /// User's token A account
    #[account(
        mut,
        constraint = user_token_a.mint == market.token_mint_a @ SwapError::InvalidAccountOwnership,
        constraint = user_token_a.owner == user.key() @ SwapError::InvalidAccountOwnership,
    )]
    pub user_token_a: Account<'info, TokenAccount>,

    /// User's token B account
    #[account(
        mut,
        constraint = user_token_b.mint == market.token_mint_b @ SwapError::InvalidAccountOwnership,
        constraint = user_token_b.owner == user.key() @ SwapError::InvalidAccountOwnership,
    )]
    pub user_token_b: Account<'info, TokenAccount>,

    /// SPL token program
    pub token_program: Program<'info, Token>,
}

impl<'info> Swap<'info> {
    /// Price the swap at the market's current price
    pub fn quote(&self, amount: u64, direction: SwapDirection) -> Result<Quote> {
        quote(amount, self.market.price, direction)
    }

    /// Input and output legs as one settlement
    pub fn settlement(&self, quote: &Quote, direction: SwapDirection) -> Settlement {
        match direction {
            SwapDirection::AToB => Settlement::new(
                TransferLeg::deposit(self.user_token_a.amount, self.vault_a.amount, quote.amount_in),
                TransferLeg::payout(self.vault_b.amount, self.user_token_b.amount, quote.amount_out),
            ),
            SwapDirection::BToA => Settlement::new(
                TransferLeg::deposit(self.user_token_b.amount, self.vault_b.amount, quote.amount_in),
                TransferLeg::payout(self.vault_a.amount, self.user_token_a.amount, quote.amount_out),
            ),
        }
    }

    /// Transfer tokens from user to vault (token in)
    pub fn transfer_in(&self, direction: SwapDirection, amount_in: u64) -> Result<()> {
        let (from, to) = match direction {
            SwapDirection::AToB => (
                self.user_token_a.to_account_info(),
                self.vault_a.to_account_info(),
            ),
            SwapDirection::BToA => (
                self.user_token_b.to_account_info(),
                self.vault_b.to_account_info(),
            ),
        };

        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from,
                to,
                authority: self.user.to_account_info(),
            },
        );
        token::transfer(cpi_ctx, amount_in)
    }

    /// Transfer tokens from vault to user (token out), signed by the market PDA
    pub fn transfer_out(&self, direction: SwapDirection, amount_out: u64) -> Result<()> {
        let token_mint_a = self.market.token_mint_a;
        let token_mint_b = self.market.token_mint_b;
        let seeds = &[
            MARKET_SEED.as_bytes(),
            token_mint_a.as_ref(),
            token_mint_b.as_ref(),
            &[self.market.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let (from, to) = match direction {
            SwapDirection::AToB => (
                self.vault_b.to_account_info(),
                self.user_token_b.to_account_info(),
            ),
            SwapDirection::BToA => (
                self.vault_a.to_account_info(),
                self.user_token_a.to_account_info(),
            ),
        };

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from,
                to,
                authority: self.market.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(cpi_ctx, amount_out)
    }
}

/// Handler function for swapping at the fixed market price
pub fn swap_handler(ctx: Context<Swap>, amount: u64, a_to_b: bool) -> Result<()> {
    let direction = SwapDirection::from(a_to_b);

    // price the swap
    let quote = ctx.accounts.quote(amount, direction)?;

    // both legs must settle before any tokens move
    let settlement = ctx.accounts.settlement(&quote, direction);
    settlement.verify()?;
    let [input, output] = settlement.legs();

    // 1. user -> vault (token in)
    if !input.is_empty() {
        ctx.accounts.transfer_in(direction, input.amount)?;
    }

    // 2. vault -> user (token out) using PDA signer
    if !output.is_empty() {
        ctx.accounts.transfer_out(direction, output.amount)?;
    }

    msg!(
        "Swap {:?}: in={}, out={}, remainder={}",
        direction,
        quote.amount_in,
        quote.amount_out,
        quote.remainder
    );

    emit!(Swapped {
        market: ctx.accounts.market.key(),
        user: ctx.accounts.user.key(),
        a_to_b: direction.is_a_to_b(),
        price: ctx.accounts.market.price,
        amount_in: quote.amount_in,
        amount_out: quote.amount_out,
        remainder: quote.remainder,
    });

    Ok(())
}
