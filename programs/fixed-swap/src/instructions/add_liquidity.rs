use crate::{
    constants::*,
    error::SwapError,
    events::LiquidityAdded,
    settlement::{Settlement, TransferLeg},
    state::MarketAccount,
};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    /// Anyone may fund the vaults
    pub provider: Signer<'info>,

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

    /// Provider's token A account
    #[account(
        mut,
        constraint = provider_token_a.mint == market.token_mint_a @ SwapError::InvalidAccountOwnership,
        constraint = provider_token_a.owner == provider.key() @ SwapError::InvalidAccountOwnership,
    )]
    pub provider_token_a: Account<'info, TokenAccount>,

    /// Provider's token B account
    #[account(
        mut,
        constraint = provider_token_b.mint == market.token_mint_b @ SwapError::InvalidAccountOwnership,
        constraint = provider_token_b.owner == provider.key() @ SwapError::InvalidAccountOwnership,
    )]
    pub provider_token_b: Account<'info, TokenAccount>,

    /// SPL token program
    pub token_program: Program<'info, Token>,
}

impl<'info> AddLiquidity<'info> {
    /// Both deposits as one settlement
    pub fn settlement(&self, amount_a: u64, amount_b: u64) -> Settlement {
        Settlement::new(
            TransferLeg::deposit(self.provider_token_a.amount, self.vault_a.amount, amount_a),
            TransferLeg::deposit(self.provider_token_b.amount, self.vault_b.amount, amount_b),
        )
    }

    /// Transfer tokens from provider to vaults, skipping empty legs
    pub fn transfer_to_vaults(&self, amount_a: u64, amount_b: u64) -> Result<()> {
        if amount_a > 0 {
            self.transfer_to_vault(
                self.provider_token_a.to_account_info(),
                self.vault_a.to_account_info(),
                amount_a,
            )?;
        }

        if amount_b > 0 {
            self.transfer_to_vault(
                self.provider_token_b.to_account_info(),
                self.vault_b.to_account_info(),
                amount_b,
            )?;
        }

        Ok(())
    }

    fn transfer_to_vault(
        &self,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from,
                to,
                authority: self.provider.to_account_info(),
            },
        );
        token::transfer(cpi_ctx, amount)
    }
}

/// Handler function for depositing liquidity
pub fn add_liquidity_handler(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
    msg!("Add liquidity: amount_a={}, amount_b={}", amount_a, amount_b);

    // both legs must settle before any tokens move
    let [leg_a, leg_b] = ctx.accounts.settlement(amount_a, amount_b).verify()?;

    ctx.accounts.transfer_to_vaults(amount_a, amount_b)?;

    msg!(
        "Vault balances: a={}, b={}",
        leg_a.destination_balance,
        leg_b.destination_balance
    );

    emit!(LiquidityAdded {
        market: ctx.accounts.market.key(),
        provider: ctx.accounts.provider.key(),
        amount_a,
        amount_b,
    });

    Ok(())
}
