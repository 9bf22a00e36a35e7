use anchor_lang::prelude::*;

use crate::constants::ALLOCATION_STATE_SEED;
use crate::state::AllocationState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.allocation_state;
    let old_owner = st.update_owner(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        old_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [ALLOCATION_STATE_SEED], bump = allocation_state.bump)]
    pub allocation_state: Account<'info, AllocationState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
