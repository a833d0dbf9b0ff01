use anchor_lang::prelude::*;

#[error_code]
pub enum SwapError {
    // Market Lifecycle Errors
    #[msg("Market is already initialized for this token pair.")]
    AlreadyInitialized,
    #[msg("Derivation bump does not reproduce the market address.")]
    InvalidDerivation,

    // Configuration Errors
    #[msg("Price must be greater than zero.")]
    InvalidPrice,
    #[msg("Token mints of a market must differ.")]
    IdenticalMints,
    #[msg("Declared decimals do not match the token mint.")]
    DecimalsMismatch,

    // Authorization Errors
    #[msg("Signer is not the market authority.")]
    Unauthorized,
    #[msg("Account does not match the expected mint or owner.")]
    InvalidAccountOwnership,

    // Balance Errors
    #[msg("Insufficient balance in source token account.")]
    InsufficientBalance,
    #[msg("Insufficient liquidity in vault.")]
    InsufficientLiquidity,

    // Math Errors
    #[msg("Mathematical overflow detected.")]
    Overflow,
}

#[cfg(test)]
pub(crate) fn assert_swap_error<T: std::fmt::Debug>(result: Result<T>, expected: SwapError) {
    use anchor_lang::error::Error;

    let code = |err: &Error| match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        _ => None,
    };
    let label = format!("{expected:?}");
    let expected_code = code(&Error::from(expected));
    match result {
        Err(err) => assert_eq!(code(&err), expected_code, "expected {label}, got {err:?}"),
        Ok(value) => panic!("expected {label}, got Ok({value:?})"),
    }
}
