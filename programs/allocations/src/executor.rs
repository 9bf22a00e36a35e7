use anchor_lang::prelude::*;

use crate::custody::TokenCustody;
use crate::error::AllocationError;
use crate::state::{AllocationState, Category};
use crate::utils::fixed_point::to_token_units;

/// Result of one `grant` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantOutcome {
    pub wallet: Pubkey,
    /// 18-decimal amount added to the ledger.
    pub amount: u128,
    /// Base units of the mint actually transferred.
    pub token_amount: u128,
    /// Ledger total after the call.
    pub released_total: u128,
}

/// Release whatever `category` is owed at `now` to its configured wallet.
///
/// The ledger is only committed after the transfer succeeds; any error
/// leaves `state` untouched. Mint units are derived from the cumulative
/// ledger so rounding to the mint's precision never drifts.
pub fn grant<C: TokenCustody>(
    state: &mut AllocationState,
    custody: &mut C,
    custodian: &Pubkey,
    category: Category,
    now: i64,
) -> Result<GrantOutcome> {
    let wallet = state
        .wallet(category)
        .ok_or(AllocationError::WalletNotConfigured)?;

    let released_before = state.released(category);
    let amount = state.releasable(category, now)?;
    if amount == 0 {
        return Ok(GrantOutcome {
            wallet,
            amount: 0,
            token_amount: 0,
            released_total: released_before,
        });
    }

    let released_total = state.released_after(category, amount)?;
    let decimals = custody.decimals();
    let token_amount = to_token_units(released_total, decimals)?
        .checked_sub(to_token_units(released_before, decimals)?)
        .ok_or(AllocationError::MathOverflow)?;

    if token_amount > 0 {
        require!(
            custody.balance_of(custodian)? >= token_amount,
            AllocationError::InsufficientVaultBalance
        );
        custody.transfer(&wallet, token_amount)?;
    }

    state.record_release(category, released_total)?;

    Ok(GrantOutcome {
        wallet,
        amount,
        token_amount,
        released_total,
    })
}
