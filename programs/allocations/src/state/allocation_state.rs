use anchor_lang::prelude::*;

use crate::constants::{CATEGORY_COUNT, POOL_SUPPLY};
use crate::error::AllocationError;
use crate::state::Category;
use crate::utils::fixed_point::to_token_units;
use crate::utils::{release, time};

/// Single allocation state PDA: anchor time, wallet directory and release ledger.
#[account]
pub struct AllocationState {
    /// Token mint held by the vault.
    pub mint: Pubkey,
    /// Owner authority for wallet and anchor changes.
    pub owner: Pubkey,
    /// Anchor (Unix seconds, UTC) every cliff is measured from.
    pub start_time: i64,
    /// Destination wallet per category; `Pubkey::default()` means unset.
    pub wallets: [Pubkey; CATEGORY_COUNT],
    /// Cumulative 18-decimal amount released per category. Only grows.
    pub released: [u128; CATEGORY_COUNT],
    /// PDA bump.
    pub bump: u8,
}

impl AllocationState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        8 +  // start_time
        32 * CATEGORY_COUNT + // wallets
        16 * CATEGORY_COUNT + // released
        1;   // bump

    fn ensure_owner(&self, signer: &Pubkey) -> std::result::Result<(), AllocationError> {
        if self.owner != *signer {
            return Err(AllocationError::Unauthorized);
        }
        Ok(())
    }

    /// Owner-only: hand the owner role to `new_owner`. Returns the previous owner.
    pub fn update_owner(
        &mut self,
        signer: &Pubkey,
        new_owner: Pubkey,
    ) -> std::result::Result<Pubkey, AllocationError> {
        self.ensure_owner(signer)?;
        if new_owner == Pubkey::default() {
            return Err(AllocationError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Owner-only: move the anchor. Released amounts are left as they are.
    pub fn update_start_time(
        &mut self,
        signer: &Pubkey,
        start_time: i64,
    ) -> std::result::Result<i64, AllocationError> {
        self.ensure_owner(signer)?;
        if start_time <= 0 {
            return Err(AllocationError::InvalidTimestamp);
        }
        Ok(std::mem::replace(&mut self.start_time, start_time))
    }

    /// Owner-only: point `category` at a new wallet. Returns the previous one.
    pub fn update_wallet(
        &mut self,
        signer: &Pubkey,
        category: Category,
        wallet: Pubkey,
    ) -> std::result::Result<Pubkey, AllocationError> {
        self.ensure_owner(signer)?;
        if wallet == Pubkey::default() {
            return Err(AllocationError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.wallets[category.index()], wallet))
    }

    pub fn timelock(&self, category: Category) -> std::result::Result<i64, AllocationError> {
        time::timelock(self.start_time, category.schedule().cliff_duration)
    }

    /// Configured wallet, or `None` when unset.
    pub fn wallet(&self, category: Category) -> Option<Pubkey> {
        let wallet = self.wallets[category.index()];
        (wallet != Pubkey::default()).then_some(wallet)
    }

    pub fn released(&self, category: Category) -> u128 {
        self.released[category.index()]
    }

    pub fn entitled(&self, category: Category, now: i64) -> std::result::Result<u128, AllocationError> {
        release::entitled_amount(category.schedule(), self.start_time, now)
    }

    /// Amount grantable now. Clamped at zero when an anchor move pushed the
    /// entitlement below what was already released.
    pub fn releasable(&self, category: Category, now: i64) -> std::result::Result<u128, AllocationError> {
        Ok(self
            .entitled(category, now)?
            .saturating_sub(self.released(category)))
    }

    /// Ledger total after releasing `amount` more, without committing it.
    pub fn released_after(
        &self,
        category: Category,
        amount: u128,
    ) -> std::result::Result<u128, AllocationError> {
        let total = self
            .released(category)
            .checked_add(amount)
            .ok_or(AllocationError::MathOverflow)?;
        if total > category.schedule().total_supply {
            return Err(AllocationError::ReleaseExceedsAllocation);
        }
        Ok(total)
    }

    /// Commit a ledger total previously checked by `released_after`.
    pub fn record_release(
        &mut self,
        category: Category,
        new_total: u128,
    ) -> std::result::Result<(), AllocationError> {
        if new_total < self.released(category) {
            return Err(AllocationError::LedgerRegression);
        }
        if new_total > category.schedule().total_supply {
            return Err(AllocationError::ReleaseExceedsAllocation);
        }
        self.released[category.index()] = new_total;
        Ok(())
    }

    pub fn total_released(&self) -> std::result::Result<u128, AllocationError> {
        self.released.iter().try_fold(0u128, |acc, r| {
            acc.checked_add(*r).ok_or(AllocationError::MathOverflow)
        })
    }

    /// Mint units the vault still owes across all categories.
    pub fn outstanding_token_units(&self, decimals: u8) -> std::result::Result<u128, AllocationError> {
        let mut sent: u128 = 0;
        for r in self.released.iter() {
            sent = sent
                .checked_add(to_token_units(*r, decimals)?)
                .ok_or(AllocationError::MathOverflow)?;
        }
        to_token_units(POOL_SUPPLY, decimals)?
            .checked_sub(sent)
            .ok_or(AllocationError::MathOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, WAD};

    const START: i64 = 1_767_225_600;

    fn state(start_time: i64) -> AllocationState {
        AllocationState {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            start_time,
            wallets: [Pubkey::default(); CATEGORY_COUNT],
            released: [0; CATEGORY_COUNT],
            bump: 255,
        }
    }

    #[test]
    fn wallets_start_unset() {
        let mut st = state(START);
        let owner = st.owner;
        assert_eq!(st.wallet(Category::Team), None);
        let w = Pubkey::new_unique();
        assert_eq!(st.update_wallet(&owner, Category::Team, w).unwrap(), Pubkey::default());
        assert_eq!(st.wallet(Category::Team), Some(w));
        assert_eq!(st.wallet(Category::Legal), None);
        assert!(matches!(
            st.update_wallet(&owner, Category::Team, Pubkey::default()),
            Err(AllocationError::InvalidPubkey)
        ));
    }

    #[test]
    fn owner_only_mutations() {
        let mut st = state(START);
        let stranger = Pubkey::new_unique();
        let w = Pubkey::new_unique();
        for c in Category::ALL {
            assert!(matches!(
                st.update_wallet(&stranger, c, w),
                Err(AllocationError::Unauthorized)
            ));
        }
        assert!(matches!(
            st.update_start_time(&stranger, START + 1),
            Err(AllocationError::Unauthorized)
        ));
        assert!(matches!(
            st.update_owner(&stranger, stranger),
            Err(AllocationError::Unauthorized)
        ));
        assert_eq!(st.wallets, [Pubkey::default(); CATEGORY_COUNT]);
        assert_eq!(st.start_time, START);
    }

    #[test]
    fn ownership_transfer() {
        let mut st = state(START);
        let old = st.owner;
        let next = Pubkey::new_unique();
        assert_eq!(st.update_owner(&old, next).unwrap(), old);
        assert!(matches!(
            st.update_start_time(&old, START + 1),
            Err(AllocationError::Unauthorized)
        ));
        assert_eq!(st.update_start_time(&next, START + 1).unwrap(), START);
        assert!(matches!(
            st.update_start_time(&next, 0),
            Err(AllocationError::InvalidTimestamp)
        ));
    }

    #[test]
    fn outstanding_units_shrink_with_releases() {
        let mut st = state(START);
        assert_eq!(st.outstanding_token_units(18).unwrap(), POOL_SUPPLY);
        let total = Category::Marketing.schedule().total_supply;
        st.record_release(Category::Marketing, total).unwrap();
        assert_eq!(
            st.outstanding_token_units(9).unwrap(),
            (POOL_SUPPLY - total) / 1_000_000_000
        );
    }

    #[test]
    fn timelock_tracks_anchor() {
        let mut st = state(START);
        let owner = st.owner;
        assert_eq!(
            st.timelock(Category::Reserve).unwrap(),
            START + 365 * SECONDS_PER_DAY
        );
        st.update_start_time(&owner, START + 7 * SECONDS_PER_DAY).unwrap();
        assert_eq!(
            st.timelock(Category::Liquidity).unwrap(),
            START + 37 * SECONDS_PER_DAY
        );
    }

    #[test]
    fn ledger_never_exceeds_allocation() {
        let mut st = state(START);
        let total = Category::Ido.schedule().total_supply;
        let next = st.released_after(Category::Ido, total - WAD).unwrap();
        st.record_release(Category::Ido, next).unwrap();
        assert!(matches!(
            st.released_after(Category::Ido, WAD + 1),
            Err(AllocationError::ReleaseExceedsAllocation)
        ));
        assert!(matches!(
            st.record_release(Category::Ido, 0),
            Err(AllocationError::LedgerRegression)
        ));
        assert_eq!(st.released(Category::Ido), total - WAD);
        assert_eq!(st.total_released().unwrap(), total - WAD);
    }

    #[test]
    fn releasable_clamps_after_anchor_move() {
        let mut st = state(START);
        let s = Category::Marketing.schedule();
        st.record_release(Category::Marketing, s.total_supply).unwrap();
        st.start_time = START + 100 * SECONDS_PER_DAY;
        assert_eq!(st.entitled(Category::Marketing, START).unwrap(), 0);
        assert_eq!(st.releasable(Category::Marketing, START).unwrap(), 0);
        assert_eq!(st.released(Category::Marketing), s.total_supply);
    }
}
