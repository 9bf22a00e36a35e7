use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ALLOCATION_STATE_SEED, VAULT_SEED};
use crate::custody::VaultCustody;
use crate::error::AllocationError;
use crate::executor;
use crate::state::{AllocationState, Category};

/// Permissionless: funds can only go to the wallet the owner configured.
pub fn grant(ctx: Context<Grant>, category: u8) -> Result<()> {
    let category = Category::try_from(category)?;
    let now = Clock::get()?.unix_timestamp;

    // Capture the PDA's AccountInfo and key before the state is borrowed mutably.
    let state_ai = ctx.accounts.allocation_state.to_account_info();
    let custodian = ctx.accounts.allocation_state.key();
    let bump = ctx.accounts.allocation_state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[ALLOCATION_STATE_SEED, &[bump]]];

    let mut custody = VaultCustody {
        vault: &ctx.accounts.vault,
        destination: &ctx.accounts.destination,
        authority: state_ai,
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds,
        decimals: ctx.accounts.mint.decimals,
    };
    let outcome = executor::grant(
        &mut ctx.accounts.allocation_state,
        &mut custody,
        &custodian,
        category,
        now,
    )?;

    if outcome.amount == 0 {
        msg!("{}: nothing due", category.name());
        return Ok(());
    }

    emit!(TokensGranted {
        category: category as u8,
        wallet: outcome.wallet,
        amount: outcome.amount,
        token_amount: outcome.token_amount,
        released_total: outcome.released_total,
        pool_released: ctx.accounts.allocation_state.total_released()?,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Grant<'info> {
    #[account(mut, seeds = [ALLOCATION_STATE_SEED], bump = allocation_state.bump)]
    pub allocation_state: Account<'info, AllocationState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, allocation_state.key().as_ref()],
        bump,
        constraint = vault.mint == allocation_state.mint @ AllocationError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token account of the category wallet; ownership is checked on transfer.
    #[account(
        mut,
        constraint = destination.mint == allocation_state.mint @ AllocationError::InvalidTokenMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    #[account(address = allocation_state.mint @ AllocationError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensGranted {
    pub category: u8,
    pub wallet: Pubkey,
    pub amount: u128,
    pub token_amount: u128,
    pub released_total: u128,
    pub pool_released: u128,
    pub timestamp: i64,
}
