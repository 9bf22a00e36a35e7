use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ALLOCATION_STATE_SEED, CATEGORY_COUNT, VAULT_SEED};
use crate::error::AllocationError;
use crate::state::AllocationState;
use crate::utils::fixed_point::check_mint_decimals;

pub fn initialize(ctx: Context<Initialize>, start_time: i64) -> Result<()> {
    require!(start_time > 0, AllocationError::InvalidTimestamp);
    check_mint_decimals(ctx.accounts.mint.decimals)?;

    let st = &mut ctx.accounts.allocation_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.start_time = start_time;
    st.wallets = [Pubkey::default(); CATEGORY_COUNT];
    st.released = [0; CATEGORY_COUNT];
    st.bump = ctx.bumps.allocation_state;

    emit!(AllocationsInitialized {
        mint: st.mint,
        owner: st.owner,
        vault: ctx.accounts.vault.key(),
        start_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + AllocationState::SIZE,
        seeds = [ALLOCATION_STATE_SEED],
        bump
    )]
    pub allocation_state: Account<'info, AllocationState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = allocation_state,
        seeds = [VAULT_SEED, allocation_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct AllocationsInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub start_time: i64,
}
