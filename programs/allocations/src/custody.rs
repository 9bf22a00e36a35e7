//! Token custody capability used by the grant path.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::AllocationError;

pub trait TokenCustody {
    /// Decimal places of the custodied token.
    fn decimals(&self) -> u8;

    /// Balance of `owner`, in token base units.
    fn balance_of(&self, owner: &Pubkey) -> Result<u128>;

    /// Move `amount` base units out of custody to the wallet `to`.
    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<()>;
}

/// SPL Token vault signed for by the allocation state PDA.
pub struct VaultCustody<'a, 'info> {
    pub vault: &'a Account<'info, TokenAccount>,
    pub destination: &'a Account<'info, TokenAccount>,
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
    pub decimals: u8,
}

impl<'a, 'info> TokenCustody for VaultCustody<'a, 'info> {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn balance_of(&self, owner: &Pubkey) -> Result<u128> {
        if *owner == self.authority.key() {
            Ok(u128::from(self.vault.amount))
        } else if *owner == self.destination.owner {
            Ok(u128::from(self.destination.amount))
        } else {
            err!(AllocationError::InvalidTokenAccount)
        }
    }

    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(
            self.destination.owner,
            *to,
            AllocationError::InvalidTokenAccount
        );
        let amount = u64::try_from(amount).map_err(|_| AllocationError::MathOverflow)?;

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )
    }
}
