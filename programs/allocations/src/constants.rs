//! Program-wide constants.

/// PDA seed for the allocation state account.
pub const ALLOCATION_STATE_SEED: &[u8] = b"allocation_state";

/// PDA seed for the vault token account (combined with the state key).
pub const VAULT_SEED: &[u8] = b"vault";

/// Number of beneficiary categories.
pub const CATEGORY_COUNT: usize = 9;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed vesting month: 30 days, not a calendar month.
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Fractional decimal digits of every internal amount.
pub const WAD_DECIMALS: u8 = 18;

/// Fixed-point scale (10^18).
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Basis points denominator for supply shares.
pub const MAX_BPS: u128 = 10_000;

/// Whole tokens held for all categories.
pub const POOL_TOKENS: u128 = 160_775_000;

/// Pool size in fixed-point units.
pub const POOL_SUPPLY: u128 = POOL_TOKENS * WAD;
