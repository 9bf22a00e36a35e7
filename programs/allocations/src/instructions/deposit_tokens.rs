use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{ALLOCATION_STATE_SEED, VAULT_SEED};
use crate::error::AllocationError;
use crate::state::AllocationState;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, AllocationError::InvalidAmount);

    let st = &ctx.accounts.allocation_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, AllocationError::Unauthorized);
    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        AllocationError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        AllocationError::InvalidTokenAccount
    );

    // Never hold more than the categories can still pull.
    let outstanding = st.outstanding_token_units(ctx.accounts.mint.decimals)?;
    let post = u128::from(ctx.accounts.vault.amount)
        .checked_add(u128::from(amount))
        .ok_or(AllocationError::MathOverflow)?;
    require!(post <= outstanding, AllocationError::OverDeposit);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        owner: ctx.accounts.owner.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [ALLOCATION_STATE_SEED], bump = allocation_state.bump)]
    pub allocation_state: Account<'info, AllocationState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, allocation_state.key().as_ref()],
        bump,
        constraint = vault.mint == allocation_state.mint @ AllocationError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(address = allocation_state.mint @ AllocationError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
