use anchor_lang::prelude::*;

use crate::constants::ALLOCATION_STATE_SEED;
use crate::state::{AllocationState, Category};

pub fn set_wallet(ctx: Context<SetWallet>, category: u8, wallet: Pubkey) -> Result<()> {
    let category = Category::try_from(category)?;
    let st = &mut ctx.accounts.allocation_state;
    let old_wallet = st.update_wallet(&ctx.accounts.owner.key(), category, wallet)?;

    emit!(WalletUpdated {
        category: category as u8,
        old_wallet,
        new_wallet: wallet,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetWallet<'info> {
    #[account(mut, seeds = [ALLOCATION_STATE_SEED], bump = allocation_state.bump)]
    pub allocation_state: Account<'info, AllocationState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct WalletUpdated {
    pub category: u8,
    pub old_wallet: Pubkey,
    pub new_wallet: Pubkey,
}
