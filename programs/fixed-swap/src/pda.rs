//! Program derived addresses of a market and its vaults.
//!
//! `find_program_address` walks bumps from 255 downward and keeps the first
//! seed set whose hash is off the ed25519 curve, so no private key can ever
//! sign for these accounts. Clients must pass that first bump back into
//! `initialize_market`.

use anchor_lang::prelude::*;

use crate::{constants::*, error::SwapError};

/// Derives the market PDA.
///
/// Seeds: `[b"market", mint_a, mint_b]`
pub fn derive_market_address(token_mint_a: &Pubkey, token_mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            MARKET_SEED.as_bytes(),
            token_mint_a.as_ref(),
            token_mint_b.as_ref(),
        ],
        &crate::ID,
    )
}

/// Derives the vault A PDA.
///
/// Seeds: `[b"vault_a", market]`
pub fn derive_vault_a_address(market: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_A_SEED.as_bytes(), market.as_ref()], &crate::ID)
}

/// Derives the vault B PDA.
///
/// Seeds: `[b"vault_b", market]`
pub fn derive_vault_b_address(market: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_B_SEED.as_bytes(), market.as_ref()], &crate::ID)
}

/// Re-derive the market address from a caller supplied bump and check it
/// lands on `expected`.
pub fn verify_market_address(
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    bump: u8,
    expected: &Pubkey,
) -> Result<()> {
    let derived = Pubkey::create_program_address(
        &[
            MARKET_SEED.as_bytes(),
            token_mint_a.as_ref(),
            token_mint_b.as_ref(),
            &[bump],
        ],
        &crate::ID,
    )
    .map_err(|_| error!(SwapError::InvalidDerivation))?;

    require_keys_eq!(derived, *expected, SwapError::InvalidDerivation);
    Ok(())
}

/// Every address a client needs to talk to one market.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketAddresses {
    pub market: Pubkey,
    pub market_bump: u8,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
}

impl MarketAddresses {
    pub fn for_pair(token_mint_a: &Pubkey, token_mint_b: &Pubkey) -> Self {
        let (market, market_bump) = derive_market_address(token_mint_a, token_mint_b);
        let (vault_a, _) = derive_vault_a_address(&market);
        let (vault_b, _) = derive_vault_b_address(&market);

        Self {
            market,
            market_bump,
            vault_a,
            vault_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_swap_error;

    #[test]
    fn test_derivation_is_deterministic() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();

        assert_eq!(
            MarketAddresses::for_pair(&mint_a, &mint_b),
            MarketAddresses::for_pair(&mint_a, &mint_b)
        );
    }

    #[test]
    fn test_pair_order_matters() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();

        let forward = MarketAddresses::for_pair(&mint_a, &mint_b);
        let reverse = MarketAddresses::for_pair(&mint_b, &mint_a);
        assert_ne!(forward.market, reverse.market);
        assert_ne!(forward.vault_a, reverse.vault_a);
    }

    #[test]
    fn test_addresses_are_distinct_and_off_curve() {
        let addrs = MarketAddresses::for_pair(&Pubkey::new_unique(), &Pubkey::new_unique());

        assert_ne!(addrs.market, addrs.vault_a);
        assert_ne!(addrs.market, addrs.vault_b);
        assert_ne!(addrs.vault_a, addrs.vault_b);
        assert!(!addrs.market.is_on_curve());
        assert!(!addrs.vault_a.is_on_curve());
        assert!(!addrs.vault_b.is_on_curve());
    }

    #[test]
    fn test_vaults_hang_off_the_market() {
        let addrs = MarketAddresses::for_pair(&Pubkey::new_unique(), &Pubkey::new_unique());

        let (vault_a, _) = Pubkey::find_program_address(
            &[b"vault_a".as_ref(), addrs.market.as_ref()],
            &crate::ID,
        );
        let (vault_b, _) = Pubkey::find_program_address(
            &[b"vault_b".as_ref(), addrs.market.as_ref()],
            &crate::ID,
        );
        assert_eq!(addrs.vault_a, vault_a);
        assert_eq!(addrs.vault_b, vault_b);
    }

    #[test]
    fn test_verify_accepts_canonical_bump() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        let (market, bump) = derive_market_address(&mint_a, &mint_b);

        assert!(verify_market_address(&mint_a, &mint_b, bump, &market).is_ok());
    }

    #[test]
    fn test_verify_rejects_other_bump() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        let (market, bump) = derive_market_address(&mint_a, &mint_b);

        assert_swap_error(
            verify_market_address(&mint_a, &mint_b, bump.wrapping_sub(1), &market),
            SwapError::InvalidDerivation,
        );
    }

    #[test]
    fn test_verify_rejects_other_pair() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        let (market, bump) = derive_market_address(&mint_a, &mint_b);

        assert_swap_error(
            verify_market_address(&mint_b, &mint_a, bump, &market),
            SwapError::InvalidDerivation,
        );
    }
}
