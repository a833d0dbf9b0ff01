use crate::{
    constants::*,
    error::SwapError,
    events::MarketInitialized,
    pda::verify_market_address,
    state::{MarketAccount, MarketParams},
};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct InitializeMarket<'info> {
    /// Authority that pays for and can reprice the market
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Market record, one per ordered mint pair
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + MarketAccount::INIT_SPACE,
        seeds = [MARKET_SEED.as_bytes(), token_mint_a.key().as_ref(), token_mint_b.key().as_ref()],
        bump
    )]
    pub market: Account<'info, MarketAccount>,

    /// Base token mint
    pub token_mint_a: Account<'info, Mint>,

    /// Quote token mint
    pub token_mint_b: Account<'info, Mint>,

    /// Vault for token A, owned by the market PDA
    #[account(
        init_if_needed,
        payer = authority,
        token::mint = token_mint_a,
        token::authority = market,
        seeds = [VAULT_A_SEED.as_bytes(), market.key().as_ref()],
        bump
    )]
    pub vault_a: Account<'info, TokenAccount>,

    /// Vault for token B, owned by the market PDA
    #[account(
        init_if_needed,
        payer = authority,
        token::mint = token_mint_b,
        token::authority = market,
        seeds = [VAULT_B_SEED.as_bytes(), market.key().as_ref()],
        bump
    )]
    pub vault_b: Account<'info, TokenAccount>,

    /// System program
    pub system_program: Program<'info, System>,

    /// SPL token program
    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

impl<'info> InitializeMarket<'info> {
    /// Validate the initialize parameters
    pub fn validate(&self, params: &MarketParams) -> Result<()> {
        // init_if_needed hands us the existing record on a repeat call
        require!(
            !self.market.is_initialized(),
            SwapError::AlreadyInitialized
        );

        verify_market_address(
            &self.token_mint_a.key(),
            &self.token_mint_b.key(),
            params.bump,
            &self.market.key(),
        )?;

        MarketAccount::validate_price(params.price)?;

        require_keys_neq!(
            self.token_mint_a.key(),
            self.token_mint_b.key(),
            SwapError::IdenticalMints
        );

        params.validate(self.token_mint_a.decimals, self.token_mint_b.decimals)
    }
}

/// Handler function for initializing a new fixed-price market
pub fn initialize_handler(
    ctx: Context<InitializeMarket>,
    price: u64,
    decimals_a: u8,
    decimals_b: u8,
    bump: u8,
) -> Result<()> {
    let params = MarketParams {
        price,
        decimals_a,
        decimals_b,
        bump,
    };

    // validate inputs
    ctx.accounts.validate(&params)?;

    let authority = ctx.accounts.authority.key();
    let token_mint_a = ctx.accounts.token_mint_a.key();
    let token_mint_b = ctx.accounts.token_mint_b.key();

    // write market record
    let market = &mut ctx.accounts.market;
    market.init(authority, token_mint_a, token_mint_b, params)?;

    msg!(
        "Market initialized: {} (a: {}, b: {})",
        market.key(),
        token_mint_a,
        token_mint_b
    );
    msg!(
        "Config: price={}, decimals_a={}, decimals_b={}",
        price,
        decimals_a,
        decimals_b
    );

    emit!(MarketInitialized {
        market: market.key(),
        authority,
        token_mint_a,
        token_mint_b,
        vault_a: ctx.accounts.vault_a.key(),
        vault_b: ctx.accounts.vault_b.key(),
        price,
        decimals_a,
        decimals_b,
    });

    Ok(())
}
