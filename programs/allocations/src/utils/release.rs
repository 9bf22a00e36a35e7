//! Entitlement calculator: how much of a category may have left custody at a
//! given instant.

use anchor_lang::prelude::*;

use crate::error::AllocationError;
use crate::state::Schedule;
use crate::utils::fixed_point::wad_mul;
use crate::utils::time;

/// Where a category sits in its release lifecycle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleasePhase {
    Locked,
    InitialUnlock,
    Vesting,
    FullyVested,
}

/// Amount unlocked at the cliff.
pub fn initial_amount(schedule: &Schedule) -> std::result::Result<u128, AllocationError> {
    wad_mul(schedule.total_supply, schedule.initial_unlock)
}

/// Size of each monthly tranche, floored. The final tranche boundary releases
/// the floor dust with it.
pub fn monthly_amount(schedule: &Schedule) -> std::result::Result<u128, AllocationError> {
    if schedule.vesting_months == 0 {
        return Ok(0);
    }
    let initial = initial_amount(schedule)?;
    let remaining = schedule
        .total_supply
        .checked_sub(initial)
        .ok_or(AllocationError::MathOverflow)?;
    Ok(remaining / u128::from(schedule.vesting_months))
}

/// Cumulative entitlement of `schedule` at `now` for the anchor `start_time`.
pub fn entitled_amount(
    schedule: &Schedule,
    start_time: i64,
    now: i64,
) -> std::result::Result<u128, AllocationError> {
    let timelock = time::timelock(start_time, schedule.cliff_duration)?;
    let months = match time::months_since(now, timelock) {
        Some(months) => months,
        None => return Ok(0),
    };
    if schedule.vesting_months == 0 || months >= u64::from(schedule.vesting_months) {
        return Ok(schedule.total_supply);
    }

    let initial = initial_amount(schedule)?;
    let monthly = monthly_amount(schedule)?;
    let vested = monthly
        .checked_mul(u128::from(months))
        .ok_or(AllocationError::MathOverflow)?;
    initial
        .checked_add(vested)
        .ok_or(AllocationError::MathOverflow)
}

pub fn release_phase(
    schedule: &Schedule,
    start_time: i64,
    now: i64,
) -> std::result::Result<ReleasePhase, AllocationError> {
    let timelock = time::timelock(start_time, schedule.cliff_duration)?;
    if time::is_after_vesting_end(now, timelock, schedule.vesting_months) {
        return Ok(ReleasePhase::FullyVested);
    }
    let phase = match time::months_since(now, timelock) {
        None => ReleasePhase::Locked,
        Some(0) => ReleasePhase::InitialUnlock,
        Some(_) => ReleasePhase::Vesting,
    };
    Ok(phase)
}
