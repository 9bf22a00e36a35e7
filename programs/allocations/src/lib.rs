use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod error;
pub mod executor;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("9SuzW9faZkmxhibN5WSjeJFZktheUkhBzDuQ19MgLseD");

#[program]
pub mod allocations {
    use super::*;

    /// Create the allocation state and its vault for `mint`; the signer becomes owner.
    pub fn initialize(ctx: Context<Initialize>, start_time: i64) -> Result<()> {
        instructions::initialize(ctx, start_time)
    }

    /// Owner funding helper; capped at what the categories can still pull.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    pub fn set_wallet(ctx: Context<SetWallet>, category: u8, wallet: Pubkey) -> Result<()> {
        instructions::set_wallet(ctx, category, wallet)
    }

    /// Move the anchor every category's cliff is measured from.
    pub fn set_start_time(ctx: Context<SetStartTime>, start_time: i64) -> Result<()> {
        instructions::set_start_time(ctx, start_time)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Release everything currently due for `category` to its wallet.
    pub fn grant(ctx: Context<Grant>, category: u8) -> Result<()> {
        instructions::grant(ctx, category)
    }

    pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, category: u8) -> Result<()> {
        instructions::emit_release_quote(ctx, category)
    }
}
