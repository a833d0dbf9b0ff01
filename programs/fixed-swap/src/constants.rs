use anchor_lang::prelude::*;

// PDA Seeds - for deterministic address generation
#[constant]
pub const MARKET_SEED: &str = "market";

#[constant]
pub const VAULT_A_SEED: &str = "vault_a";

#[constant]
pub const VAULT_B_SEED: &str = "vault_b";
