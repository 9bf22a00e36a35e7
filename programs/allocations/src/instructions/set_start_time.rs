use anchor_lang::prelude::*;

use crate::constants::ALLOCATION_STATE_SEED;
use crate::state::AllocationState;

pub fn set_start_time(ctx: Context<SetStartTime>, start_time: i64) -> Result<()> {
    let st = &mut ctx.accounts.allocation_state;
    let old_start_time = st.update_start_time(&ctx.accounts.owner.key(), start_time)?;

    emit!(StartTimeUpdated {
        owner: st.owner,
        old_start_time,
        new_start_time: start_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetStartTime<'info> {
    #[account(mut, seeds = [ALLOCATION_STATE_SEED], bump = allocation_state.bump)]
    pub allocation_state: Account<'info, AllocationState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct StartTimeUpdated {
    pub owner: Pubkey,
    pub old_start_time: i64,
    pub new_start_time: i64,
}
