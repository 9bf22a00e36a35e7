use anchor_lang::prelude::*;

use crate::constants::ALLOCATION_STATE_SEED;
use crate::state::{AllocationState, Category};
use crate::utils::release::{self, ReleasePhase};
use crate::utils::time;

pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, category: u8) -> Result<()> {
    let category = Category::try_from(category)?;
    let st = &ctx.accounts.allocation_state;
    let schedule = category.schedule();
    let now = Clock::get()?.unix_timestamp;
    let timelock = st.timelock(category)?;

    emit!(ReleaseQuote {
        category: category as u8,
        total_supply: schedule.total_supply,
        cliff_duration: schedule.cliff_duration,
        vesting_months: schedule.vesting_months,
        initial_unlock: schedule.initial_unlock,
        timelock,
        vesting_end: time::month_boundary(timelock, schedule.vesting_months)?,
        wallet: st.wallets[category.index()],
        phase: release::release_phase(schedule, st.start_time, now)?,
        entitled: st.entitled(category, now)?,
        released: st.released(category),
        releasable: st.releasable(category, now)?,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitReleaseQuote<'info> {
    #[account(seeds = [ALLOCATION_STATE_SEED], bump = allocation_state.bump)]
    pub allocation_state: Account<'info, AllocationState>,
}

#[event]
pub struct ReleaseQuote {
    pub category: u8,
    pub total_supply: u128,
    pub cliff_duration: i64,
    pub vesting_months: u32,
    pub initial_unlock: u128,
    pub timelock: i64,
    pub vesting_end: i64,
    pub wallet: Pubkey,
    pub phase: ReleasePhase,
    pub entitled: u128,
    pub released: u128,
    pub releasable: u128,
    pub timestamp: i64,
}
