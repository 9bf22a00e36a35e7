//! 18-decimal fixed-point helpers. Every operation floors.

use crate::constants::{MAX_BPS, POOL_SUPPLY, WAD, WAD_DECIMALS};
use crate::error::AllocationError;

/// Fraction expressed in whole percent, as a fixed-point value.
pub const fn wad_from_percent(percent: u128) -> u128 {
    percent * WAD / 100
}

/// `amount * bps / 10_000`, floored.
pub const fn bps_of(amount: u128, bps: u128) -> u128 {
    amount * bps / MAX_BPS
}

/// `floor(amount * fraction / 10^18)`.
///
/// `amount` is split into whole and fractional parts so the intermediate
/// product stays inside `u128` for pool-sized amounts.
pub fn wad_mul(amount: u128, fraction: u128) -> Result<u128, AllocationError> {
    let whole = (amount / WAD)
        .checked_mul(fraction)
        .ok_or(AllocationError::MathOverflow)?;
    let part = (amount % WAD)
        .checked_mul(fraction)
        .ok_or(AllocationError::MathOverflow)?
        / WAD;
    whole.checked_add(part).ok_or(AllocationError::MathOverflow)
}

/// Convert an 18-decimal amount into base units of a mint with `decimals`.
pub fn to_token_units(amount: u128, decimals: u8) -> Result<u128, AllocationError> {
    if decimals > WAD_DECIMALS {
        return Err(AllocationError::InvalidTokenMint);
    }
    let divisor = 10u128
        .checked_pow(u32::from(WAD_DECIMALS - decimals))
        .ok_or(AllocationError::MathOverflow)?;
    Ok(amount / divisor)
}

/// Reject mints whose base units cannot express the whole pool as an SPL
/// `u64` amount (more than 11 decimals).
pub fn check_mint_decimals(decimals: u8) -> Result<(), AllocationError> {
    if to_token_units(POOL_SUPPLY, decimals)? > u128::from(u64::MAX) {
        return Err(AllocationError::InvalidTokenMint);
    }
    Ok(())
}
