use anchor_lang::prelude::*;

/// Custom error codes for the allocations program.
#[error_code]
pub enum AllocationError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("No wallet configured for this category")]
    WalletNotConfigured,

    #[msg("Unknown allocation category")]
    InvalidCategory,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed the outstanding pool")]
    OverDeposit,

    #[msg("Release would exceed the category allocation")]
    ReleaseExceedsAllocation,

    #[msg("Release ledger cannot decrease")]
    LedgerRegression,

    #[msg("Math overflow")]
    MathOverflow,
}
