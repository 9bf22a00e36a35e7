use crate::constants::{CATEGORY_COUNT, POOL_SUPPLY, SECONDS_PER_DAY};
use crate::error::AllocationError;
use crate::utils::fixed_point::{bps_of, wad_from_percent};

/// Beneficiary bucket. The discriminant indexes the schedule table and the
/// per-category arrays of the allocation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    Liquidity = 0,
    Team = 1,
    Marketing = 2,
    Presale = 3,
    Reserve = 4,
    Technology = 5,
    Legal = 6,
    Advisor = 7,
    Ido = 8,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Liquidity,
        Category::Team,
        Category::Marketing,
        Category::Presale,
        Category::Reserve,
        Category::Technology,
        Category::Legal,
        Category::Advisor,
        Category::Ido,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn schedule(self) -> &'static Schedule {
        &SCHEDULES[self.index()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Liquidity => "liquidity",
            Category::Team => "team",
            Category::Marketing => "marketing",
            Category::Presale => "presale",
            Category::Reserve => "reserve",
            Category::Technology => "technology",
            Category::Legal => "legal",
            Category::Advisor => "advisor",
            Category::Ido => "ido",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = AllocationError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Category::ALL
            .get(value as usize)
            .copied()
            .ok_or(AllocationError::InvalidCategory)
    }
}

/// Immutable release terms of one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub category: Category,
    /// Share of the pool in basis points.
    pub share_bps: u128,
    /// Allocation in 18-decimal fixed point.
    pub total_supply: u128,
    /// Seconds after the anchor before anything unlocks.
    pub cliff_duration: i64,
    /// Equal 30-day tranches after the cliff; 0 unlocks everything at the cliff.
    pub vesting_months: u32,
    /// Fixed-point fraction of `total_supply` released at the cliff.
    pub initial_unlock: u128,
}

impl Schedule {
    const fn new(
        category: Category,
        share_bps: u128,
        cliff_days: i64,
        initial_percent: u128,
        vesting_months: u32,
    ) -> Self {
        Self {
            category,
            share_bps,
            total_supply: bps_of(POOL_SUPPLY, share_bps),
            cliff_duration: cliff_days * SECONDS_PER_DAY,
            vesting_months,
            initial_unlock: wad_from_percent(initial_percent),
        }
    }
}

pub static SCHEDULES: [Schedule; CATEGORY_COUNT] = [
    Schedule::new(Category::Liquidity, 4126, 30, 0, 10),
    Schedule::new(Category::Team, 1875, 0, 15, 17),
    Schedule::new(Category::Marketing, 1150, 0, 100, 0),
    Schedule::new(Category::Presale, 1068, 0, 25, 3),
    Schedule::new(Category::Reserve, 625, 365, 0, 12),
    Schedule::new(Category::Technology, 500, 0, 15, 17),
    Schedule::new(Category::Legal, 350, 0, 15, 17),
    Schedule::new(Category::Advisor, 250, 0, 15, 17),
    Schedule::new(Category::Ido, 56, 0, 100, 0),
];
